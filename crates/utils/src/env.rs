// Copyright 2025 Irreducible Inc.

/// Returns whether the environment variable `flag` holds a truthy value.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| is_truthy(&val))
}

fn is_truthy(val: &str) -> bool {
	matches!(val.trim().to_ascii_lowercase().as_str(), "1" | "on" | "true" | "yes")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truthy_values() {
		for val in ["1", "on", "ON", "true", "True", "yes", " YES "] {
			assert!(is_truthy(val), "{val}");
		}
		for val in ["", "0", "off", "false", "no", "y"] {
			assert!(!is_truthy(val), "{val}");
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("BLAKE_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
	}
}
