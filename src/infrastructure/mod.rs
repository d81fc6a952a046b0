// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_rows;
pub mod http_response;
pub mod published_sheet_repository;
