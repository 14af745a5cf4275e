pub use super::key_values::Entity as KeyValues;
