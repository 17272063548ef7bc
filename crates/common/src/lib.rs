pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
