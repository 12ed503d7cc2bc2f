//! CreateSubscriptionHandler - the core checkout orchestration.
//!
//! Sequence per checkout: validate locally, create the monthly credit-card
//! subscription billed today, re-assert the customer's notification opt-out,
//! then look up the first payment the gateway generated. Only the
//! subscription creation is load-bearing; the last two steps never fail the
//! checkout.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::checkout::{
    CardDetails, CheckoutError, CreditCardInput, CustomerDetails, CustomerInput,
};
use crate::ports::{
    CreateSubscriptionRequest, CreditCardData, CreditCardHolderInfo, Payment, PaymentGateway,
    Subscription, UpdateCustomerRequest,
};

/// Placeholder postal code; the form does not collect an address.
const HOLDER_POSTAL_CODE: &str = "00000000";
const HOLDER_ADDRESS_NUMBER: &str = "0";

/// Command carrying everything one subscription checkout needs.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    /// Gateway customer id from the preceding create-customer step.
    pub customer_id: String,
    /// Monthly charge in BRL.
    pub amount: f64,
    pub credit_card: CreditCardInput,
    /// Cardholder identity, re-validated here because the two checkout calls
    /// are independent requests.
    pub customer: CustomerInput,
    pub remote_ip: String,
}

/// What the checkout hands back to the caller.
#[derive(Debug, Clone)]
pub struct SubscriptionOutcome {
    pub subscription: Subscription,
    /// Earliest payment the gateway had generated by the time we asked.
    /// `None` when the gateway had not produced one yet.
    pub first_payment: Option<Payment>,
}

pub struct CreateSubscriptionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateSubscriptionHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<SubscriptionOutcome, CheckoutError> {
        self.handle_at(cmd, Utc::now().date_naive()).await
    }

    /// Same as `handle` but with an explicit billing date, so expiry and
    /// due-date behavior stay deterministic under test.
    pub async fn handle_at(
        &self,
        cmd: CreateSubscriptionCommand,
        today: NaiveDate,
    ) -> Result<SubscriptionOutcome, CheckoutError> {
        if cmd.amount <= 0.0 {
            return Err(CheckoutError::validation(
                "value",
                "Valor deve ser maior que zero",
            ));
        }
        if cmd.customer_id.trim().is_empty() {
            return Err(CheckoutError::validation(
                "customerId",
                "Cliente não informado",
            ));
        }

        let card = CardDetails::parse(&cmd.credit_card, today)?;
        let holder = CustomerDetails::parse(&cmd.customer)?;

        let request = CreateSubscriptionRequest {
            customer_id: cmd.customer_id.clone(),
            value: cmd.amount,
            // Billing today makes the gateway charge the card immediately.
            next_due_date: today,
            description: Some(format!("Assinatura - {}", holder.name)),
            credit_card: CreditCardData {
                holder_name: card.holder_name.clone(),
                number: card.number.clone(),
                expiry_month: card.expiry_month_padded(),
                expiry_year: card.expiry_year.to_string(),
                ccv: card.ccv.clone(),
            },
            credit_card_holder_info: CreditCardHolderInfo {
                name: holder.name.clone(),
                email: holder.email.clone(),
                cpf_cnpj: holder.cpf_cnpj.clone(),
                postal_code: HOLDER_POSTAL_CODE.to_string(),
                address_number: HOLDER_ADDRESS_NUMBER.to_string(),
                phone: holder.phone.as_str().to_string(),
            },
            remote_ip: cmd.remote_ip.clone(),
        };

        let subscription = self
            .gateway
            .create_subscription(request)
            .await
            .map_err(|e| CheckoutError::Gateway(e.message))?;

        tracing::info!(
            subscription_id = %subscription.id,
            customer_id = %subscription.customer_id,
            "Subscription created"
        );

        self.reassert_notification_opt_out(&cmd.customer_id).await;
        let first_payment = self.first_payment(&subscription.id).await;

        Ok(SubscriptionOutcome {
            subscription,
            first_payment,
        })
    }

    /// Creating a subscription can flip the customer's notification settings
    /// back on provider-side, so we re-disable them. Best effort: the
    /// subscription already exists and a preference glitch must not undo
    /// the charge.
    async fn reassert_notification_opt_out(&self, customer_id: &str) {
        let request = UpdateCustomerRequest {
            notification_disabled: Some(true),
        };
        if let Err(e) = self.gateway.update_customer(customer_id, request).await {
            tracing::warn!(
                customer_id,
                error = %e,
                "Could not re-disable customer notifications"
            );
        }
    }

    /// Earliest payment by due date, or `None` when the gateway has not
    /// generated one yet (it does so asynchronously) or the lookup failed.
    async fn first_payment(&self, subscription_id: &str) -> Option<Payment> {
        match self.gateway.list_subscription_payments(subscription_id).await {
            Ok(page) if page.data.is_empty() => {
                tracing::info!(subscription_id, "No payments generated yet");
                None
            }
            Ok(page) => page.data.into_iter().min_by_key(|p| p.due_date),
            Err(e) => {
                tracing::warn!(
                    subscription_id,
                    error = %e,
                    "Could not list subscription payments"
                );
                None
            }
        }
    }
}
