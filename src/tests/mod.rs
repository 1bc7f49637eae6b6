//! Test modules for the Diligence GUI
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `api_test` - API client and response envelope
//!   - `report_test` - Section extraction and HTML block parsing
//!   - `app_test` - Input, validation, alert, and settings state
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `integration_test` - Response-to-render pipeline
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test report_test
//! ```

#[cfg(test)]
pub mod api_test;



#[cfg(test)]
pub mod integration_test;
