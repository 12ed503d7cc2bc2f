//! CreateCustomerHandler - validates form input and creates the gateway customer.

use std::sync::Arc;

use crate::domain::checkout::{CheckoutError, CustomerDetails, CustomerInput, PhoneNumber};
use crate::ports::{CreateCustomerRequest, Customer, PaymentGateway};

/// Command carrying the raw customer form fields.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub customer: CustomerInput,
}

/// Handler for the first checkout step.
///
/// Rejects invalid input before any network call, then creates the customer
/// with gateway notifications disabled so the provider does not mail the
/// buyer about every invoice.
pub struct CreateCustomerHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateCustomerHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: CreateCustomerCommand) -> Result<Customer, CheckoutError> {
        let details = CustomerDetails::parse(&cmd.customer)?;

        let (phone, mobile_phone) = match &details.phone {
            PhoneNumber::Landline(n) => (Some(n.clone()), None),
            PhoneNumber::Mobile(n) => (None, Some(n.clone())),
        };

        let customer = self
            .gateway
            .create_customer(CreateCustomerRequest {
                name: details.name,
                cpf_cnpj: details.cpf_cnpj,
                email: details.email,
                phone,
                mobile_phone,
                notification_disabled: true,
            })
            .await
            .map_err(|e| CheckoutError::Gateway(e.message))?;

        tracing::info!(customer_id = %customer.id, "Gateway customer created");
        Ok(customer)
    }
}
