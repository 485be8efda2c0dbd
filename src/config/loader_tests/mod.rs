mod discovery_tests;
mod mock_fs;
