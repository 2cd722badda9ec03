pub mod r#box;
