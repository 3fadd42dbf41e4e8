//! Identifier case conversions shared by the configuration and templates.

use heck::{ToKebabCase, ToPascalCase, ToSnakeCase};

/// Convert a string to snake_case (e.g., "MyService" -> "my_service")
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Convert a string to PascalCase (e.g., "my-service" -> "MyService")
pub fn to_pascal_case(s: &str) -> String {
    s.to_pascal_case()
}

/// Convert a string to kebab-case (e.g., "my_service" -> "my-service")
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}
