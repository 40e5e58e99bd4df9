mod wellbeing_gateway;

pub use wellbeing_gateway::{WellbeingGateway, WellbeingGatewayError};
