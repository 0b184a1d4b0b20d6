pub mod mock_transport;
pub mod whois_server_mock;

pub use mock_transport::MockTransport;
pub use whois_server_mock::MockWhoisServer;
