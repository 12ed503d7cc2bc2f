//! Asaas wire types.
//!
//! JSON shapes exactly as the provider sends and receives them (camelCase
//! fields, SCREAMING_SNAKE enums). Conversions into the port types live here
//! so the rest of the crate never sees provider naming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::PersonType;
use crate::ports::{
    BillingCycle, BillingType, CreateCustomerRequest, CreateSubscriptionRequest, Customer,
    GatewayError, Payment, PaymentPage, PixQrCode, Subscription, SubscriptionStatus,
    UpdateCustomerRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error envelope
// ════════════════════════════════════════════════════════════════════════════════

/// Body the provider returns on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct AsaasErrorBody {
    #[serde(default)]
    pub errors: Vec<AsaasErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AsaasErrorEntry {
    #[serde(default)]
    pub code: Option<String>,
    pub description: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Request bodies
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerBody {
    pub name: String,
    pub cpf_cnpj: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    pub notification_disabled: bool,
}

impl From<CreateCustomerRequest> for CreateCustomerBody {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            name: req.name,
            cpf_cnpj: req.cpf_cnpj,
            email: req.email,
            phone: req.phone,
            mobile_phone: req.mobile_phone,
            notification_disabled: req.notification_disabled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
}

impl From<UpdateCustomerRequest> for UpdateCustomerBody {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            notification_disabled: req.notification_disabled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardBody {
    pub holder_name: String,
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub ccv: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardHolderInfoBody {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub postal_code: String,
    pub address_number: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionBody {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    /// YYYY-MM-DD; chrono's NaiveDate serde format matches.
    pub next_due_date: NaiveDate,
    pub cycle: BillingCycle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub credit_card: CreditCardBody,
    pub credit_card_holder_info: CreditCardHolderInfoBody,
    pub remote_ip: String,
}

impl From<CreateSubscriptionRequest> for CreateSubscriptionBody {
    fn from(req: CreateSubscriptionRequest) -> Self {
        Self {
            customer: req.customer_id,
            billing_type: BillingType::CreditCard,
            value: req.value,
            next_due_date: req.next_due_date,
            cycle: BillingCycle::Monthly,
            description: req.description,
            credit_card: CreditCardBody {
                holder_name: req.credit_card.holder_name,
                number: req.credit_card.number,
                expiry_month: req.credit_card.expiry_month,
                expiry_year: req.credit_card.expiry_year,
                ccv: req.credit_card.ccv,
            },
            credit_card_holder_info: CreditCardHolderInfoBody {
                name: req.credit_card_holder_info.name,
                email: req.credit_card_holder_info.email,
                cpf_cnpj: req.credit_card_holder_info.cpf_cnpj,
                postal_code: req.credit_card_holder_info.postal_code,
                address_number: req.credit_card_holder_info.address_number,
                phone: req.credit_card_holder_info.phone,
            },
            remote_ip: req.remote_ip,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response bodies
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasCustomer {
    pub id: String,
    pub name: String,
    pub cpf_cnpj: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    pub person_type: PersonType,
}

impl From<AsaasCustomer> for Customer {
    fn from(wire: AsaasCustomer) -> Self {
        Customer {
            id: wire.id,
            name: wire.name,
            cpf_cnpj: wire.cpf_cnpj,
            email: wire.email,
            phone: wire.phone,
            mobile_phone: wire.mobile_phone,
            person_type: wire.person_type,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasSubscription {
    pub id: String,
    pub customer: String,
    pub billing_type: BillingType,
    pub cycle: BillingCycle,
    pub value: f64,
    pub next_due_date: NaiveDate,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AsaasSubscription> for Subscription {
    fn from(wire: AsaasSubscription) -> Self {
        Subscription {
            id: wire.id,
            customer_id: wire.customer,
            billing_type: wire.billing_type,
            cycle: wire.cycle,
            value: wire.value,
            next_due_date: wire.next_due_date,
            status: wire.status,
            description: wire.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasPayment {
    pub id: String,
    pub customer: String,
    #[serde(default)]
    pub subscription: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub net_value: Option<f64>,
    pub billing_type: BillingType,
    pub status: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AsaasPayment> for Payment {
    fn from(wire: AsaasPayment) -> Self {
        Payment {
            id: wire.id,
            customer_id: wire.customer,
            subscription_id: wire.subscription,
            value: wire.value,
            net_value: wire.net_value,
            billing_type: wire.billing_type,
            status: wire.status,
            due_date: wire.due_date,
            description: wire.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasPaymentList {
    pub has_more: bool,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
    pub data: Vec<AsaasPayment>,
}

impl From<AsaasPaymentList> for PaymentPage {
    fn from(wire: AsaasPaymentList) -> Self {
        PaymentPage {
            has_more: wire.has_more,
            total_count: wire.total_count,
            limit: wire.limit,
            offset: wire.offset,
            data: wire.data.into_iter().map(Payment::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsaasPixQrCode {
    pub encoded_image: String,
    pub payload: String,
    pub expiration_date: String,
}

impl From<AsaasPixQrCode> for PixQrCode {
    fn from(wire: AsaasPixQrCode) -> Self {
        PixQrCode {
            encoded_image: wire.encoded_image,
            payload: wire.payload,
            expiration_date: wire.expiration_date,
        }
    }
}

/// Extract the first structured error description from a provider error body.
pub fn first_error_description(body: &[u8]) -> Option<GatewayError> {
    let parsed: AsaasErrorBody = serde_json::from_slice(body).ok()?;
    let entry = parsed.errors.into_iter().next()?;
    let mut err = GatewayError::rejected(entry.description);
    if let Some(code) = entry.code {
        err = err.with_provider_code(code);
    }
    Some(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CreditCardData, CreditCardHolderInfo};

    #[test]
    fn subscription_body_serializes_provider_field_names() {
        let req = CreateSubscriptionRequest {
            customer_id: "cus_000001".to_string(),
            value: 100.0,
            next_due_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            description: Some("Assinatura - Maria Silva".to_string()),
            credit_card: CreditCardData {
                holder_name: "MARIA SILVA".to_string(),
                number: "4532015112830366".to_string(),
                expiry_month: "12".to_string(),
                expiry_year: "2030".to_string(),
                ccv: "123".to_string(),
            },
            credit_card_holder_info: CreditCardHolderInfo {
                name: "Maria Silva".to_string(),
                email: "maria@example.com".to_string(),
                cpf_cnpj: "52998224725".to_string(),
                postal_code: "00000000".to_string(),
                address_number: "0".to_string(),
                phone: "11987654321".to_string(),
            },
            remote_ip: "127.0.0.1".to_string(),
        };

        let json = serde_json::to_value(CreateSubscriptionBody::from(req)).unwrap();
        assert_eq!(json["customer"], "cus_000001");
        assert_eq!(json["billingType"], "CREDIT_CARD");
        assert_eq!(json["cycle"], "MONTHLY");
        assert_eq!(json["nextDueDate"], "2026-08-30");
        assert_eq!(json["creditCard"]["holderName"], "MARIA SILVA");
        assert_eq!(json["creditCardHolderInfo"]["postalCode"], "00000000");
        assert_eq!(json["remoteIp"], "127.0.0.1");
    }

    #[test]
    fn customer_body_omits_empty_phone_slot() {
        let body = CreateCustomerBody::from(CreateCustomerRequest {
            name: "Maria Silva".to_string(),
            cpf_cnpj: "52998224725".to_string(),
            email: "maria@example.com".to_string(),
            phone: None,
            mobile_phone: Some("11987654321".to_string()),
            notification_disabled: true,
        });
        let json = serde_json::to_value(body).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["mobilePhone"], "11987654321");
        assert_eq!(json["notificationDisabled"], true);
    }

    #[test]
    fn parses_customer_response() {
        let body = r#"{
            "object": "customer",
            "id": "cus_000005219613",
            "dateCreated": "2026-08-30",
            "name": "Maria Silva",
            "email": "maria@example.com",
            "mobilePhone": "11987654321",
            "cpfCnpj": "52998224725",
            "personType": "FISICA"
        }"#;
        let customer: AsaasCustomer = serde_json::from_str(body).unwrap();
        let customer = Customer::from(customer);
        assert_eq!(customer.id, "cus_000005219613");
        assert_eq!(customer.person_type, PersonType::Individual);
        assert!(customer.phone.is_none());
    }

    #[test]
    fn first_error_description_takes_the_head_of_the_list() {
        let body = r#"{"errors":[
            {"code":"invalid_creditCard","description":"Cartão recusado"},
            {"code":"invalid_value","description":"Valor inválido"}
        ]}"#
        .as_bytes();
        let err = first_error_description(body).unwrap();
        assert_eq!(err.message, "Cartão recusado");
        assert_eq!(err.provider_code.as_deref(), Some("invalid_creditCard"));
    }

    #[test]
    fn first_error_description_handles_empty_or_malformed_bodies() {
        assert!(first_error_description(br#"{"errors":[]}"#).is_none());
        assert!(first_error_description(b"<html>502</html>").is_none());
    }
}
