#[cfg(test)]
pub mod fixtures {
    /// A well-formed JSON-mode completion with an embedded SQL block.
    pub const JSON_COMPLETION: &str = r#"{
  "questions": [
    {
      "question": "What is a closure?",
      "answer": "A closure is a function bundled with references to its surrounding lexical scope."
    },
    {
      "question": "Write a SQL query that totals sales per category.",
      "answer": "Group the order lines by category:\n```sql\nSELECT product_category, SUM(quantity * unit_price) AS total_sales\nFROM order_items\nGROUP BY product_category;\n```\nAn index on product_category helps on large tables."
    }
  ]
}"#;

    /// JSON-mode completion missing its closing brace.
    pub const MALFORMED_JSON_COMPLETION: &str =
        r#"{"questions":[{"question":"What is a closure?","answer":"A function."}]"#;

    /// A line-oriented completion with a preamble and a multi-line answer.
    pub const QA_LINES_COMPLETION: &str = "Here are your interview questions.

Q: What is ownership in Rust?
A: Every value has a single owner, and the value is dropped when the owner goes out of scope.

Q: What does borrowing mean?
A: Borrowing lets code use a value without taking ownership of it.
```rust
fn len(s: &String) -> usize {
    s.len()
}
```
Shared borrows are read-only.

Q: When would you reach for Rc<RefCell<T>>?
A: When several owners need to mutate shared data in single-threaded code.
";
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionSet;

    #[test]
    fn test_fixtures_json_completion_is_valid() {
        let set: QuestionSet = serde_json::from_str(JSON_COMPLETION).unwrap();
        assert_eq!(set.questions.len(), 2);
    }

    #[test]
    fn test_fixtures_malformed_json_is_invalid() {
        assert!(serde_json::from_str::<QuestionSet>(MALFORMED_JSON_COMPLETION).is_err());
    }
}
