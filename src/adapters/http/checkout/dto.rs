//! HTTP DTOs for the checkout endpoints.
//!
//! These types define the JSON request/response structure for the checkout
//! API. Field names follow the camelCase convention the web client sends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::checkout::{CreditCardInput, CustomerInput, PersonType};
use crate::ports::{BillingCycle, BillingType, Customer, Payment, Subscription, SubscriptionStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Envelope
// ════════════════════════════════════════════════════════════════════════════════

/// Uniform response envelope.
///
/// Success responses carry `data`, failures carry `error`; the two never
/// appear together.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Customer form fields as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub cpf_cnpj: String,
    pub email: String,
    pub phone: String,
}

impl From<CustomerDto> for CustomerInput {
    fn from(dto: CustomerDto) -> Self {
        CustomerInput {
            name: dto.name,
            cpf_cnpj: dto.cpf_cnpj,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

/// Card fields as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardDto {
    pub number: String,
    pub holder_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub ccv: String,
}

impl From<CreditCardDto> for CreditCardInput {
    fn from(dto: CreditCardDto) -> Self {
        CreditCardInput {
            number: dto.number,
            holder_name: dto.holder_name,
            expiry_month: dto.expiry_month,
            expiry_year: dto.expiry_year,
            ccv: dto.ccv,
        }
    }
}

/// Request to create a gateway customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    #[serde(flatten)]
    pub customer: CustomerDto,
}

/// Request to create the monthly subscription.
///
/// The amount comes either from a configured plan (`plan_id`) or as an
/// explicit `value`; a known plan wins over the explicit value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionDto {
    pub customer_id: String,
    #[serde(default)]
    pub plan_id: Option<Uuid>,
    #[serde(default)]
    pub value: Option<f64>,
    pub credit_card: CreditCardDto,
    /// Cardholder identity; re-validated server-side.
    pub customer: CustomerDto,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Customer as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub cpf_cnpj: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub person_type: PersonType,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            cpf_cnpj: customer.cpf_cnpj,
            email: customer.email,
            phone: customer.phone,
            mobile_phone: customer.mobile_phone,
            person_type: customer.person_type,
        }
    }
}

/// Subscription as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: String,
    pub customer_id: String,
    pub billing_type: BillingType,
    pub cycle: BillingCycle,
    pub value: f64,
    pub next_due_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub description: Option<String>,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            customer_id: subscription.customer_id,
            billing_type: subscription.billing_type,
            cycle: subscription.cycle,
            value: subscription.value,
            next_due_date: subscription.next_due_date,
            status: subscription.status,
            description: subscription.description,
        }
    }
}

/// Payment as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub value: f64,
    pub net_value: Option<f64>,
    pub billing_type: BillingType,
    pub status: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            value: payment.value,
            net_value: payment.net_value,
            billing_type: payment.billing_type,
            status: payment.status,
            due_date: payment.due_date,
            description: payment.description,
        }
    }
}

/// Response for the subscription checkout step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub subscription: SubscriptionResponse,
    /// Earliest payment generated so far, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_payment: Option<PaymentResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_fields() {
        let ok = serde_json::to_value(ApiResponse::ok(json!({"id": "x"}))).unwrap();
        assert_eq!(ok["success"], true);
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(ApiResponse::<()>::err("boom")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "boom");
        assert!(err.get("data").is_none());
    }

    #[test]
    fn subscription_request_accepts_camel_case() {
        let dto: CreateSubscriptionDto = serde_json::from_value(json!({
            "customerId": "cus_1",
            "planId": "00000000-0000-0000-0000-000000000001",
            "creditCard": {
                "number": "4532015112830366",
                "holderName": "MARIA SILVA",
                "expiryMonth": "12",
                "expiryYear": "2030",
                "ccv": "123"
            },
            "customer": {
                "name": "Maria Silva",
                "cpfCnpj": "529.982.247-25",
                "email": "maria@example.com",
                "phone": "11987654321"
            }
        }))
        .unwrap();
        assert_eq!(dto.customer_id, "cus_1");
        assert!(dto.plan_id.is_some());
        assert!(dto.value.is_none());
        assert_eq!(dto.credit_card.holder_name, "MARIA SILVA");
        assert_eq!(dto.customer.cpf_cnpj, "529.982.247-25");
    }

    #[test]
    fn checkout_response_serializes_dates_as_iso() {
        let response = CheckoutResponse {
            subscription: SubscriptionResponse {
                id: "sub_1".to_string(),
                customer_id: "cus_1".to_string(),
                billing_type: BillingType::CreditCard,
                cycle: BillingCycle::Monthly,
                value: 99.9,
                next_due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                status: SubscriptionStatus::Active,
                description: Some("Assinatura - Maria Silva".to_string()),
            },
            first_payment: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["subscription"]["nextDueDate"], "2024-06-15");
        assert_eq!(value["subscription"]["cycle"], "MONTHLY");
        assert!(value.get("firstPayment").is_none());
    }
}
