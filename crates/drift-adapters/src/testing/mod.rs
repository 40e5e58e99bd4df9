mod failing_gateway;
mod stub_gateway;

pub use failing_gateway::FailingWellbeingGateway;
pub use stub_gateway::StubWellbeingGateway;
