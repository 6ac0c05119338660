#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::env;

    use crate::env::{get_env_var, get_optional_env_var, EnvError};

    #[test]
    fn test_get_env_var_missing_reports_key() {
        let key = "SHARED_TEST_SURELY_UNSET_VARIABLE";
        env::remove_var(key);
        match get_env_var(key) {
            Err(EnvError::EnvVar(_, name)) => assert_eq!(name, key),
            Ok(value) => panic!("unexpected value {value}"),
        }
    }

    #[test]
    fn test_get_env_var_present() -> Result<(), EnvError> {
        let key = "SHARED_TEST_PRESENT_VARIABLE";
        env::set_var(key, "http://localhost:8096");
        assert_eq!(get_env_var(key)?, "http://localhost:8096");
        Ok(())
    }

    #[test]
    fn test_get_optional_env_var_empty_is_none() -> Result<(), EnvError> {
        let key = "SHARED_TEST_EMPTY_VARIABLE";
        env::set_var(key, "  ");
        assert_eq!(get_optional_env_var(key)?, None);
        env::remove_var(key);
        assert_eq!(get_optional_env_var(key)?, None);
        Ok(())
    }

    #[rstest]
    #[case("SHARED_TEST_TRIMMED_A", "token ", Some("token "))]
    #[case("SHARED_TEST_TRIMMED_B", "\t", None)]
    #[case("SHARED_TEST_TRIMMED_C", "0", Some("0"))]
    fn test_get_optional_env_var_values(
        #[case] key: &str,
        #[case] value: &str,
        #[case] expected: Option<&str>,
    ) -> Result<(), EnvError> {
        env::set_var(key, value);
        assert_eq!(get_optional_env_var(key)?.as_deref(), expected);
        Ok(())
    }
}
