pub mod function_event;
