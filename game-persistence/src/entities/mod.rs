pub mod prelude;

pub mod key_values;
