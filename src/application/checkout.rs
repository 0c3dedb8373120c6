use crate::domain::assembler::FormAssembler;
use crate::domain::method::{INQUIRY_ENDPOINT, PaymentMethod, VOID_REFUND_ENDPOINT};
use crate::domain::outcome::{ResponseOutcome, interpret};
use crate::domain::payload::{InquiryRequest, RefundRequest};
use crate::domain::ports::{AlertKind, FieldSource, PaymentGatewayBox, UiPresenterBox};
use crate::error::{CheckoutError, Result};
use serde::Serialize;
use tracing::{info, warn};

/// Failure text shown when the request never produced a server verdict.
const TRANSPORT_FAILURE_TEXT: &str = "An unexpected error occurred. Please try again.";

/// The main entry point for checkout submissions.
///
/// `CheckoutFlow` owns the collaborator ports and runs one request/response
/// cycle per call: assemble the payload, resolve the endpoint, submit,
/// classify the reply, and dispatch the outcome to the presenter. Calls are
/// independent and reentrant; no state crosses submissions.
pub struct CheckoutFlow {
    assembler: FormAssembler,
    gateway: PaymentGatewayBox,
    presenter: UiPresenterBox,
}

impl CheckoutFlow {
    /// Creates a new `CheckoutFlow` with injected collaborators.
    ///
    /// # Arguments
    ///
    /// * `assembler` - The pure payload builder, configured with the origin.
    /// * `gateway` - The outbound HTTP port.
    /// * `presenter` - The terminal UI actions port.
    pub fn new(
        assembler: FormAssembler,
        gateway: PaymentGatewayBox,
        presenter: UiPresenterBox,
    ) -> Self {
        Self {
            assembler,
            gateway,
            presenter,
        }
    }

    /// Submits one payment attempt for the selected method.
    ///
    /// The submit control is disabled for the duration of the flight and
    /// restored on every exit path. Validation errors are rendered and
    /// returned; transport failures are rendered as a generic [`ResponseOutcome::Failure`].
    pub async fn submit(
        &self,
        method: PaymentMethod,
        fields: &dyn FieldSource,
    ) -> Result<ResponseOutcome> {
        self.presenter.disable_submit();
        let result = self.submit_inner(method, fields).await;
        self.presenter.restore_submit();

        match result {
            Ok(outcome) => {
                self.dispatch(&outcome);
                Ok(outcome)
            }
            Err(error) => {
                self.presenter
                    .render_alert(AlertKind::Error, &error.to_string());
                Err(error)
            }
        }
    }

    async fn submit_inner(
        &self,
        method: PaymentMethod,
        fields: &dyn FieldSource,
    ) -> Result<ResponseOutcome> {
        let payload = self.assembler.assemble(method, fields)?;
        info!(method = %method, endpoint = method.endpoint(), "submitting payment");
        self.exchange(method.endpoint(), &payload, Some(method))
            .await
    }

    /// Inquires about the status of a previously submitted payment.
    pub async fn inquire(&self, request: InquiryRequest) -> Result<ResponseOutcome> {
        info!(order_id = %request.order_id, "submitting payment inquiry");
        let outcome = self.exchange(INQUIRY_ENDPOINT, &request, None).await?;
        self.dispatch(&outcome);
        Ok(outcome)
    }

    /// Voids or refunds a completed payment.
    pub async fn refund(&self, request: RefundRequest) -> Result<ResponseOutcome> {
        if let Err(error) = request.validate() {
            self.presenter
                .render_alert(AlertKind::Error, &error.to_string());
            return Err(error);
        }
        info!(order_id = %request.order_id, "submitting void/refund");
        let outcome = self.exchange(VOID_REFUND_ENDPOINT, &request, None).await?;
        self.dispatch(&outcome);
        Ok(outcome)
    }

    /// Performs the POST and classifies the reply. Transport and parse
    /// failures never escape as errors; they become a generic failure
    /// outcome so the page-level contract (always render something) holds.
    async fn exchange<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        method: Option<PaymentMethod>,
    ) -> Result<ResponseOutcome> {
        let body = serde_json::to_value(body)?;
        match self.gateway.post(endpoint, &body).await {
            Ok(reply) => Ok(interpret(reply.ok, &reply.body, method)),
            Err(CheckoutError::Transport(error)) => {
                warn!(endpoint, error = %error, "transport failure");
                Ok(ResponseOutcome::Failure {
                    code: None,
                    message: TRANSPORT_FAILURE_TEXT.to_string(),
                })
            }
            Err(error) => Err(error),
        }
    }

    fn dispatch(&self, outcome: &ResponseOutcome) {
        match outcome {
            ResponseOutcome::Redirect(url) => self.presenter.navigate_to(url),
            ResponseOutcome::QrImage(data_uri) => self.presenter.show_qr_modal(data_uri),
            ResponseOutcome::Success { order_id, .. } => {
                let order_id = order_id.as_deref().unwrap_or("unknown");
                self.presenter.render_alert(
                    AlertKind::Success,
                    &format!("Payment initiated successfully. Order ID: {order_id}"),
                );
            }
            ResponseOutcome::Failure { message, .. } => {
                self.presenter.render_alert(AlertKind::Error, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::GatewayReply;
    use crate::infrastructure::in_memory::{
        MapFieldSource, PresenterEvent, RecordingPresenter, ScriptedGateway,
    };
    use serde_json::json;

    fn payment_fields() -> MapFieldSource {
        MapFieldSource::from_pairs([
            ("merchant_id", "MERCH-12345"),
            ("order_id", "ORDER123"),
            ("amount", "100.00"),
            ("currency", "THB"),
            ("description", "Payment for order ORDER123"),
        ])
    }

    fn flow_with(gateway: ScriptedGateway) -> (CheckoutFlow, RecordingPresenter) {
        let presenter = RecordingPresenter::new();
        let assembler = FormAssembler::new("https://merchant.example".parse().unwrap());
        let flow = CheckoutFlow::new(
            assembler,
            Box::new(gateway),
            Box::new(presenter.clone()),
        );
        (flow, presenter)
    }

    #[tokio::test]
    async fn test_success_renders_alert_and_restores_submit() {
        let gateway = ScriptedGateway::new();
        gateway.push_reply(GatewayReply {
            ok: true,
            body: json!({"order_id": "ORDER123"}),
        });
        let (flow, presenter) = flow_with(gateway);

        let outcome = flow
            .submit(PaymentMethod::CreditCard, &payment_fields())
            .await
            .unwrap();

        assert!(matches!(outcome, ResponseOutcome::Success { .. }));
        assert_eq!(
            presenter.events(),
            vec![
                PresenterEvent::DisableSubmit,
                PresenterEvent::RestoreSubmit,
                PresenterEvent::Alert(
                    AlertKind::Success,
                    "Payment initiated successfully. Order ID: ORDER123".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_qr_reply_opens_modal() {
        let gateway = ScriptedGateway::new();
        gateway.push_reply(GatewayReply {
            ok: true,
            body: json!({"qr_image": "data:image/svg+xml;base64,AAAA"}),
        });
        let (flow, presenter) = flow_with(gateway);

        flow.submit(PaymentMethod::QrPayment, &payment_fields())
            .await
            .unwrap();

        assert!(presenter.events().contains(&PresenterEvent::QrModal(
            "data:image/svg+xml;base64,AAAA".to_string()
        )));
    }

    #[tokio::test]
    async fn test_redirect_reply_navigates() {
        let gateway = ScriptedGateway::new();
        gateway.push_reply(GatewayReply {
            ok: true,
            body: json!({"redirect_url": "https://gateway.example/pay"}),
        });
        let (flow, presenter) = flow_with(gateway);

        flow.submit(PaymentMethod::InternetBanking, &payment_fields())
            .await
            .unwrap();

        assert!(presenter.events().contains(&PresenterEvent::Navigate(
            "https://gateway.example/pay".to_string()
        )));
    }

    #[tokio::test]
    async fn test_server_error_renders_composed_message() {
        let gateway = ScriptedGateway::new();
        gateway.push_reply(GatewayReply {
            ok: false,
            body: json!({"error": "PAYMENT_FAILED", "message": "Card declined"}),
        });
        let (flow, presenter) = flow_with(gateway);

        let outcome = flow
            .submit(PaymentMethod::CreditCard, &payment_fields())
            .await
            .unwrap();

        assert!(matches!(outcome, ResponseOutcome::Failure { .. }));
        assert!(presenter.events().contains(&PresenterEvent::Alert(
            AlertKind::Error,
            "PAYMENT_FAILED: Card declined".to_string()
        )));
    }

    #[tokio::test]
    async fn test_validation_error_skips_network_and_restores_submit() {
        let gateway = ScriptedGateway::new();
        let (flow, presenter) = flow_with(gateway);

        let mut fields = payment_fields();
        fields.insert("amount", "not_a_number");

        let result = flow.submit(PaymentMethod::CreditCard, &fields).await;
        assert!(matches!(result, Err(CheckoutError::Validation(_))));

        let events = presenter.events();
        assert_eq!(events[0], PresenterEvent::DisableSubmit);
        assert_eq!(events[1], PresenterEvent::RestoreSubmit);
        assert!(matches!(events[2], PresenterEvent::Alert(AlertKind::Error, _)));
    }

    #[tokio::test]
    async fn test_inquiry_posts_minimal_payload() {
        let gateway = ScriptedGateway::new();
        gateway.push_reply(GatewayReply {
            ok: true,
            body: json!({"order_id": "ORDER123"}),
        });
        let (flow, presenter) = flow_with(gateway.clone());

        let outcome = flow
            .inquire(InquiryRequest {
                merchant_id: "MERCH-12345".to_string(),
                order_id: "ORDER123".to_string(),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, ResponseOutcome::Success { method: None, .. }));

        let (endpoint, body) = gateway.requests().pop().unwrap();
        assert_eq!(endpoint, INQUIRY_ENDPOINT);
        assert_eq!(
            body,
            json!({"merchant_id": "MERCH-12345", "order_id": "ORDER123"})
        );
        assert!(!presenter.events().is_empty());
    }

    #[tokio::test]
    async fn test_refund_without_amount_is_rejected() {
        let gateway = ScriptedGateway::new();
        let (flow, _presenter) = flow_with(gateway.clone());

        let result = flow
            .refund(RefundRequest {
                merchant_id: "MERCH-12345".to_string(),
                order_id: "ORDER123".to_string(),
                refund_type: crate::domain::payload::RefundType::Refund,
                amount: None,
                description: None,
            })
            .await;

        assert!(matches!(result, Err(CheckoutError::Validation(_))));
        assert!(gateway.requests().is_empty());
    }
}
