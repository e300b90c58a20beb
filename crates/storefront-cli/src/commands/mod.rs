pub mod resolve;
pub mod routes;
pub mod serve;
pub mod url_for;
