pub mod init;
pub mod migrate;
pub mod schema;
pub mod seed;
pub mod serve;
