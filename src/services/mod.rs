pub mod dispatcher;
pub mod reader;
pub mod responses;
pub mod validator;
