// ABOUTME: Shared test support: scripted mock for the remote Pages API.
// ABOUTME: Declared as a module by the test files that drive the lifecycle.

pub mod mock_api;
