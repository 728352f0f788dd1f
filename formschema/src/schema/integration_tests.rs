//! End-to-end tests for schema checks over whole records.

#[cfg(test)]
mod tests {
    use crate::core::{NoRecord, Record};
    use crate::errors::CheckError;
    use crate::schema::Schema;
    use crate::testing::{
        assert_error_message, assert_invalid, assert_schema_invalid, assert_schema_valid,
        assert_valid, init_tracing,
    };
    use crate::types::{
        ArrayType, BooleanType, DateType, NumberType, ObjectType, StringType, TypeBuilder,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn signup() -> Schema {
        Schema::new()
            .field(
                "username",
                StringType::new()
                    .required_with_message("Username is required".to_string())
                    .range_length(3, 16),
            )
            .field("email", StringType::new().required().is_email())
            .field(
                "password",
                StringType::new()
                    .required()
                    .min_length(8)
                    .contains_number(),
            )
            .field(
                "confirmPassword",
                StringType::new()
                    .required()
                    .equal_to("password")
                    .rule_message("Passwords do not match".to_string()),
            )
            .field("age", NumberType::new().is_integer().min(13.0))
            .field("newsletter", BooleanType::new())
    }

    #[test]
    fn test_number_field_cases() {
        let schema: Schema = Schema::new().field("n", NumberType::new());

        for valid in [json!("2.22"), json!(2.22), json!(2), json!(-222), json!(""), Value::Null] {
            let record = json!({ "n": valid });
            assert_valid(&schema.check_for_field("n", &record).ready().unwrap());
        }
        for invalid in [json!("abc"), json!("1abc"), json!({}), json!([]), json!(true)] {
            let record = json!({ "n": invalid });
            assert_error_message(
                &schema.check_for_field("n", &record).ready().unwrap(),
                &"Please enter a valid number".to_string(),
            );
        }
        assert_valid(&schema.check_for_field("n", &json!({})).ready().unwrap());
    }

    #[test]
    fn test_cross_field_rule_reads_raw_record() {
        let schema = signup();
        let matching = json!({"password": "hunter22", "confirmPassword": "hunter22"});
        let different = json!({"password": "hunter22", "confirmPassword": "hunter23"});

        assert_valid(
            &schema
                .check_for_field("confirmPassword", &matching)
                .ready()
                .unwrap(),
        );
        assert_error_message(
            &schema
                .check_for_field("confirmPassword", &different)
                .ready()
                .unwrap(),
            &"Passwords do not match".to_string(),
        );
    }

    #[test]
    fn test_unknown_field_is_a_fault() {
        let schema = signup();
        let err = schema
            .check_for_field("nickname", &json!({"nickname": "ada"}))
            .ready()
            .unwrap_err();

        assert!(err.is_unknown_field());
        assert_eq!(
            err.to_string(),
            "Unknown field: 'nickname' is not declared in the schema"
        );
    }

    #[test]
    fn test_other_record_types() {
        let schema: Schema = Schema::new().field("age", NumberType::new().required());

        let mut map: HashMap<String, Value> = HashMap::new();
        map.insert("age".to_string(), json!("42"));
        assert_schema_valid(&schema.check(&map).ready().unwrap());

        let result = schema.check(&NoRecord).ready().unwrap();
        assert_schema_invalid(&result, &["age"]);
    }

    #[test]
    fn test_valid_signup() {
        init_tracing();
        let record = json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "analytical1",
            "confirmPassword": "analytical1",
            "age": "36",
            "newsletter": true,
        });
        let result = signup().check(&record).ready().unwrap();
        assert_schema_valid(&result);
        assert_eq!(
            result.fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["username", "email", "password", "confirmPassword", "age", "newsletter"]
        );
    }

    #[test]
    fn test_every_field_is_checked() {
        init_tracing();
        let record = json!({
            "email": "not-an-email",
            "password": "short",
            "confirmPassword": "different",
            "age": 12.5,
            "newsletter": "yes",
        });
        let result = signup().check(&record).ready().unwrap();

        assert_schema_invalid(
            &result,
            &["username", "email", "password", "confirmPassword", "age", "newsletter"],
        );
        assert_eq!(result.error_count(), 6);
        assert_eq!(
            result.get("username").unwrap().error_message.as_deref(),
            Some("Username is required")
        );
        assert_eq!(
            result.get("password").unwrap().error_message.as_deref(),
            Some("Must be at least 8 characters")
        );
        assert_eq!(
            result.get("age").unwrap().error_message.as_deref(),
            Some("Must be an integer")
        );
    }

    #[test]
    fn test_check_is_idempotent_and_read_only() {
        let schema = signup();
        let record = json!({"username": "x", "email": "a@b.co", "age": "abc"});
        let snapshot = record.clone();

        let first = schema.check(&record).ready().unwrap();
        let second = schema.check(&record).ready().unwrap();

        assert_eq!(first, second);
        assert_eq!(record, snapshot);
        assert_eq!(schema.len(), 6);
    }

    #[test]
    fn test_results_serialize() {
        let schema: Schema = Schema::new()
            .field("a", NumberType::new().required())
            .field("b", StringType::new());
        let result = schema.check(&json!({"b": "ok"})).ready().unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "has_error": true,
                "fields": {
                    "a": {"has_error": true, "error_message": "This field is required"},
                    "b": {"has_error": false},
                },
            })
        );
    }

    #[test]
    fn test_array_of_numbers() {
        let schema: Schema = Schema::new().field("scores", ArrayType::new().of(NumberType::new()));

        let valid = schema
            .check_for_field("scores", &json!({"scores": [1, 2, 3]}))
            .ready()
            .unwrap();
        assert_valid(&valid);

        let invalid = schema
            .check_for_field("scores", &json!({"scores": [1, "x", 3]}))
            .ready()
            .unwrap();
        assert_invalid(&invalid);
        assert_eq!(invalid.first_error_index(), Some(1));
    }

    #[test]
    fn test_object_with_required_field() {
        let schema: Schema = Schema::new().field(
            "point",
            ObjectType::new().shape(Schema::new().field("a", NumberType::new().required())),
        );

        let valid = schema
            .check_for_field("point", &json!({"point": {"a": 1}}))
            .ready()
            .unwrap();
        assert_valid(&valid);

        let invalid = schema
            .check_for_field("point", &json!({"point": {}}))
            .ready()
            .unwrap();
        assert_error_message(&invalid, &"This field is required".to_string());
        assert!(invalid.field("a").unwrap().has_error);
    }

    #[test]
    fn test_array_of_objects() {
        let person: Schema = Schema::new()
            .field("name", StringType::new().required())
            .field("born", DateType::new());
        let schema: Schema = Schema::new().field(
            "people",
            ArrayType::new().of(ObjectType::new().shape(person)).min_length(1),
        );

        let record = json!({"people": [
            {"name": "Ada", "born": "1815-12-10"},
            {"name": "Grace", "born": "sometime"},
        ]});
        let result = schema.check(&record).ready().unwrap();
        let people = result.get("people").unwrap();

        assert_eq!(people.first_error_index(), Some(1));
        assert_eq!(
            people.error_message.as_deref(),
            Some("Please enter a valid date")
        );
        let items = people.array.as_ref().unwrap();
        assert!(items[1].field("born").unwrap().has_error);
        assert!(!items[1].field("name").unwrap().has_error);

        let empty = schema.check(&json!({"people": []})).ready().unwrap();
        assert_eq!(
            empty.get("people").unwrap().error_message.as_deref(),
            Some("Must contain at least 1 items")
        );
    }

    #[test]
    fn test_fault_path_through_nesting() {
        let address: Schema = Schema::new().field(
            "zip",
            StringType::new().add_rule(|_: &Value, _: &dyn Record| -> anyhow::Result<bool> {
                anyhow::bail!("zip service offline")
            }),
        );
        let schema: Schema = Schema::new().field(
            "people",
            ArrayType::new().of(ObjectType::new().shape(
                Schema::new().field("address", ObjectType::new().shape(address)),
            )),
        );

        let record = json!({"people": [
            {"address": {}},
            {"address": {}},
            {"address": {"zip": "12345"}},
        ]});
        let err = schema.check(&record).ready().unwrap_err();

        match err {
            CheckError::RuleFault { ref path, index, .. } => {
                assert_eq!(path, "people[2].address.zip");
                assert_eq!(index, 0);
            }
            other => panic!("expected a rule fault, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pending_field_makes_record_pending() {
        let lookups = Arc::new(AtomicUsize::new(0));
        let calls = Arc::clone(&lookups);
        let schema: Schema = Schema::new()
            .field("name", StringType::new().required())
            .field(
                "email",
                StringType::new().is_email().add_async_rule_with_message(
                    move |value, _| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Box::pin(async move {
                            tokio::time::sleep(Duration::from_millis(10)).await;
                            value != "taken@example.com"
                        })
                    },
                    "Email already registered".to_string(),
                ),
            )
            .field("age", NumberType::new());

        let record = json!({"email": "taken@example.com", "age": "x"});
        let checked = schema.check(&record);
        assert!(checked.is_pending());
        assert!(matches!(
            schema.check(&record).ready(),
            Err(CheckError::Pending)
        ));

        let result = checked.await.unwrap();
        assert_schema_invalid(&result, &["name", "email", "age"]);
        assert_eq!(
            result.get("email").unwrap().error_message.as_deref(),
            Some("Email already registered")
        );
        assert_eq!(
            result.fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["name", "email", "age"]
        );
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_pending_fields_resolve_concurrently() {
        let slow = || {
            StringType::new().add_async_rule(|_, _| {
                Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    true
                })
            })
        };
        let schema: Schema = Schema::new()
            .field("a", slow())
            .field("b", slow())
            .field("c", slow());
        let record = json!({"a": "x", "b": "y", "c": "z"});

        let started = tokio::time::Instant::now();
        let result = schema.check(&record).await.unwrap();

        assert_schema_valid(&result);
        assert!(started.elapsed() < Duration::from_millis(140));
    }

    #[tokio::test]
    async fn test_pending_field_fault() {
        let schema: Schema = Schema::new().field(
            "token",
            StringType::new().add_async_rule(|_, _| {
                Box::pin(async { Err::<bool, _>(anyhow::anyhow!("auth server down")) })
            }),
        );
        let err = schema
            .check(&json!({"token": "abc"}))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rule 0 failed to evaluate at 'token': auth server down"
        );
    }
}
