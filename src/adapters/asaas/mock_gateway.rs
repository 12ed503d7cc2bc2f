//! In-memory `PaymentGateway` for tests and local development.
//!
//! Records every request it receives and can be told to fail individual
//! operations, which is enough to exercise the orchestrator's partial-failure
//! policy without a network.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::checkout::PersonType;
use crate::ports::{
    BillingCycle, BillingType, CreateCustomerRequest, CreateSubscriptionRequest, Customer,
    GatewayError, Payment, PaymentGateway, PaymentPage, PixQrCode, Subscription,
    SubscriptionStatus, UpdateCustomerRequest,
};

/// Scriptable gateway double.
#[derive(Default)]
pub struct MockPaymentGateway {
    pub fail_create_customer: Option<GatewayError>,
    pub fail_create_subscription: Option<GatewayError>,
    pub fail_update_customer: Option<GatewayError>,
    pub fail_list_payments: Option<GatewayError>,
    /// Payments returned by the list query, in provider order.
    pub payments: Vec<Payment>,

    created_customers: Mutex<Vec<CreateCustomerRequest>>,
    created_subscriptions: Mutex<Vec<CreateSubscriptionRequest>>,
    updated_customers: Mutex<Vec<(String, UpdateCustomerRequest)>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }

    pub fn failing_create_customer(mut self, err: GatewayError) -> Self {
        self.fail_create_customer = Some(err);
        self
    }

    pub fn failing_create_subscription(mut self, err: GatewayError) -> Self {
        self.fail_create_subscription = Some(err);
        self
    }

    pub fn failing_update_customer(mut self, err: GatewayError) -> Self {
        self.fail_update_customer = Some(err);
        self
    }

    pub fn failing_list_payments(mut self, err: GatewayError) -> Self {
        self.fail_list_payments = Some(err);
        self
    }

    pub fn created_customers(&self) -> Vec<CreateCustomerRequest> {
        self.created_customers.lock().unwrap().clone()
    }

    pub fn created_subscriptions(&self) -> Vec<CreateSubscriptionRequest> {
        self.created_subscriptions.lock().unwrap().clone()
    }

    pub fn updated_customers(&self) -> Vec<(String, UpdateCustomerRequest)> {
        self.updated_customers.lock().unwrap().clone()
    }

    /// A payment in the provider's PENDING state.
    pub fn pending_payment(id: &str, due_date: NaiveDate) -> Payment {
        Payment {
            id: id.to_string(),
            customer_id: "cus_mock".to_string(),
            subscription_id: Some("sub_mock".to_string()),
            value: 100.0,
            net_value: Some(97.0),
            billing_type: BillingType::CreditCard,
            status: "PENDING".to_string(),
            due_date,
            description: None,
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, GatewayError> {
        if let Some(err) = &self.fail_create_customer {
            return Err(err.clone());
        }
        let person_type = if request.cpf_cnpj.len() == 14 {
            PersonType::Company
        } else {
            PersonType::Individual
        };
        let customer = Customer {
            id: "cus_mock".to_string(),
            name: request.name.clone(),
            cpf_cnpj: request.cpf_cnpj.clone(),
            email: Some(request.email.clone()),
            phone: request.phone.clone(),
            mobile_phone: request.mobile_phone.clone(),
            person_type,
        };
        self.created_customers.lock().unwrap().push(request);
        Ok(customer)
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, GatewayError> {
        if let Some(err) = &self.fail_update_customer {
            return Err(err.clone());
        }
        self.updated_customers
            .lock()
            .unwrap()
            .push((customer_id.to_string(), request));
        Ok(Customer {
            id: customer_id.to_string(),
            name: "Mock Customer".to_string(),
            cpf_cnpj: "52998224725".to_string(),
            email: None,
            phone: None,
            mobile_phone: None,
            person_type: PersonType::Individual,
        })
    }

    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<Subscription, GatewayError> {
        if let Some(err) = &self.fail_create_subscription {
            return Err(err.clone());
        }
        let subscription = Subscription {
            id: "sub_mock".to_string(),
            customer_id: request.customer_id.clone(),
            billing_type: BillingType::CreditCard,
            cycle: BillingCycle::Monthly,
            value: request.value,
            next_due_date: request.next_due_date,
            status: SubscriptionStatus::Active,
            description: request.description.clone(),
        };
        self.created_subscriptions.lock().unwrap().push(request);
        Ok(subscription)
    }

    async fn list_subscription_payments(
        &self,
        _subscription_id: &str,
    ) -> Result<PaymentPage, GatewayError> {
        if let Some(err) = &self.fail_list_payments {
            return Err(err.clone());
        }
        Ok(PaymentPage {
            has_more: false,
            total_count: self.payments.len() as u64,
            limit: 10,
            offset: 0,
            data: self.payments.clone(),
        })
    }

    async fn pix_qr_code(&self, _payment_id: &str) -> Result<PixQrCode, GatewayError> {
        Ok(PixQrCode {
            encoded_image: "aGVsbG8=".to_string(),
            payload: "00020126...".to_string(),
            expiration_date: "2030-12-31 23:59:59".to_string(),
        })
    }
}
