mod roster_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the crate:
// - projection_tests: Weekly FTE projection behaviour
// - roster_tests: Roster persistence, per-resource projection and totals
// - smoke_tests: Configuration and error plumbing
