//! Integration tests for multi-turn drafting conversations.
//!
//! These tests drive the orchestrator end to end through in-memory adapters:
//! 1. A message is classified and validated
//! 2. Incomplete drafts are parked behind a single question
//! 3. The next message answers (or cancels) the parked draft
//! 4. Ready drafts can be handed to the poster
//!
//! The model provider is mocked; every scenario must also hold on the
//! rule-based path alone.

use regex::Regex;
use serde_json::{json, Value};
use std::sync::Arc;

use ledger_copilot::adapters::{
    InMemoryDraftPoster, InMemoryPendingStore, InMemoryTenantDirectory, MockAIProvider, MockError,
};
use ledger_copilot::application::{DraftOrchestrator, ExecuteDraftCommand, ExecuteDraftHandler};
use ledger_copilot::domain::drafting::{
    Draft, DraftData, Intent, MissingFieldStatus, PendingDraft, PurchaseOrderData, TenantHints,
};
use ledger_copilot::domain::foundation::{SessionContext, TenantId, UserId};
use ledger_copilot::ports::PendingDraftStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn session(tenant: &str, user: &str) -> SessionContext {
    SessionContext::new(TenantId::new(tenant).unwrap(), UserId::new(user).unwrap())
}

fn rules_only() -> (DraftOrchestrator, Arc<InMemoryPendingStore>) {
    let store = Arc::new(InMemoryPendingStore::new());
    (DraftOrchestrator::new(store.clone()), store)
}

fn to_json(draft: &Draft) -> Value {
    serde_json::to_value(draft).unwrap()
}

// =============================================================================
// Single-turn scenarios
// =============================================================================

#[tokio::test]
async fn complete_invoice_is_ready() {
    let (orchestrator, store) = rules_only();
    let ctx = session("acme-books", "user-1");

    let draft = orchestrator
        .resolve("sold 10 widgets to Acme at 100 on cash sku SKU-1", &ctx)
        .await;

    assert_eq!(draft.intent, Intent::CreateInvoice);
    assert!(draft.ready_to_execute);
    assert!(draft.missing.is_empty());

    let json = to_json(&draft);
    assert_eq!(json["intent"], "create_invoice");
    assert_eq!(json["readyToExecute"], true);
    assert_eq!(json["data"]["partnerName"], "Acme");
    assert_eq!(json["data"]["paymentMethod"], "Cash");
    assert_eq!(json["data"]["items"][0]["productName"], "Widgets");
    assert_eq!(json["data"]["items"][0]["quantity"], json!(10.0));
    assert_eq!(json["data"]["items"][0]["price"], json!(100.0));
    assert_eq!(json["data"]["items"][0]["sku"], "SKU-1");
    assert!(json.get("missing").is_none());

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn investment_in_lac_is_capital_journal() {
    let (orchestrator, _) = rules_only();
    let draft = orchestrator
        .resolve("invest 5 lac", &session("acme-books", "user-1"))
        .await;

    assert_eq!(draft.intent, Intent::CreateJournal);
    assert!(draft.ready_to_execute);

    let entries = &to_json(&draft)["data"]["entries"];
    assert_eq!(entries[0]["accountCode"], 101);
    assert_eq!(entries[0]["debit"], json!(500000.0));
    assert_eq!(entries[0]["credit"], json!(0.0));
    assert_eq!(entries[1]["accountCode"], 301);
    assert_eq!(entries[1]["debit"], json!(0.0));
    assert_eq!(entries[1]["credit"], json!(500000.0));
}

#[tokio::test]
async fn rent_is_expense_journal() {
    let (orchestrator, _) = rules_only();
    let draft = orchestrator
        .resolve("rent 50000", &session("acme-books", "user-1"))
        .await;

    assert_eq!(draft.intent, Intent::CreateJournal);
    assert!(draft.ready_to_execute);

    let entries = &to_json(&draft)["data"]["entries"];
    assert_eq!(entries[0]["accountCode"], 502);
    assert_eq!(entries[0]["debit"], json!(50000.0));
    assert_eq!(entries[1]["accountCode"], 101);
    assert_eq!(entries[1]["credit"], json!(50000.0));
}

#[tokio::test]
async fn thousands_separators_are_understood() {
    let (orchestrator, _) = rules_only();
    let draft = orchestrator
        .resolve("Rent 1,50,000", &session("acme-books", "user-1"))
        .await;

    let entries = &to_json(&draft)["data"]["entries"];
    assert_eq!(entries[0]["debit"], json!(150000.0));
}

#[tokio::test]
async fn small_talk_is_general_chat() {
    let (orchestrator, store) = rules_only();
    let draft = orchestrator
        .resolve("tell me a joke", &session("acme-books", "user-1"))
        .await;

    assert_eq!(draft.intent, Intent::GeneralChat);
    assert!(!draft.ready_to_execute);
    assert!(store.is_empty().await);
}

// =============================================================================
// Multi-turn conversations
// =============================================================================

#[tokio::test]
async fn auto_sku_completes_invoice() {
    let (orchestrator, store) = rules_only();
    let ctx = session("acme-books", "user-1");

    let first = orchestrator
        .resolve("sold 10 widgets to Acme at 100 on cash", &ctx)
        .await;
    assert!(!first.ready_to_execute);
    assert_eq!(first.status, Some(MissingFieldStatus::WaitingForSku));
    assert!(first.message.contains("auto"));

    let second = orchestrator.resolve("auto", &ctx).await;
    assert_eq!(second.intent, Intent::CreateInvoice);
    assert!(second.ready_to_execute);

    let sku = to_json(&second)["data"]["items"][0]["sku"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(Regex::new(r"^SKU-\d+$").unwrap().is_match(&sku), "sku {}", sku);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn invoice_asks_one_field_at_a_time() {
    let (orchestrator, _) = rules_only();
    let ctx = session("acme-books", "user-1");

    // Quantity defaults to one and payment method to credit.
    let draft = orchestrator.resolve("sold widgets", &ctx).await;
    assert_eq!(draft.status, Some(MissingFieldStatus::WaitingForCustomer));

    let draft = orchestrator.resolve("Acme Corp", &ctx).await;
    assert_eq!(draft.status, Some(MissingFieldStatus::WaitingForPrice));
    assert!(draft.message.contains("Widgets"), "{}", draft.message);

    let draft = orchestrator.resolve("250", &ctx).await;
    assert_eq!(draft.status, Some(MissingFieldStatus::WaitingForSku));

    let draft = orchestrator.resolve("wd-12", &ctx).await;
    assert!(draft.ready_to_execute);

    let json = to_json(&draft);
    assert_eq!(json["data"]["partnerName"], "Acme Corp");
    assert_eq!(json["data"]["items"][0]["quantity"], json!(1.0));
    assert_eq!(json["data"]["items"][0]["price"], json!(250.0));
    assert_eq!(json["data"]["items"][0]["sku"], "WD-12");
    assert_eq!(json["data"]["paymentMethod"], "Credit");
}

#[tokio::test]
async fn unparseable_answer_asks_again() {
    let (orchestrator, store) = rules_only();
    let ctx = session("acme-books", "user-1");

    orchestrator.resolve("sold widgets to acme", &ctx).await;
    let again = orchestrator.resolve("not sure yet", &ctx).await;

    assert_eq!(again.status, Some(MissingFieldStatus::WaitingForPrice));
    assert!(!store.is_empty().await);
}

#[tokio::test]
async fn purchase_order_totals_after_supplier_answer() {
    let (orchestrator, _) = rules_only();
    let ctx = session("acme-books", "user-1");

    let first = orchestrator
        .resolve("purchase order for 10 chairs at 50 sku ch-1", &ctx)
        .await;
    assert_eq!(first.intent, Intent::CreatePurchaseOrder);
    assert_eq!(first.status, Some(MissingFieldStatus::WaitingForPoSupplier));

    let second = orchestrator.resolve("Ikea", &ctx).await;
    assert!(second.ready_to_execute);

    match &second.data {
        DraftData::PurchaseOrder(PurchaseOrderData { supplier_name, items, total, .. }) => {
            assert_eq!(supplier_name.as_deref(), Some("Ikea"));
            assert_eq!(items[0].line_total, Some(500.0));
            assert_eq!(*total, Some(500.0));
        }
        other => panic!("unexpected payload {:?}", other),
    }
    assert!(second.message.contains("PO total: 500"));
    assert!(second.message.contains("until the goods are received"));
}

#[tokio::test]
async fn cancel_discards_pending_purchase_order() {
    let (orchestrator, store) = rules_only();
    let ctx = session("acme-books", "user-1");

    let first = orchestrator
        .resolve("purchase order for 10 chairs at 50 sku ch-1", &ctx)
        .await;
    assert_eq!(first.status, Some(MissingFieldStatus::WaitingForPoSupplier));
    assert!(!store.is_empty().await);

    let cancelled = orchestrator.resolve("cancel", &ctx).await;
    assert_eq!(cancelled.intent, Intent::GeneralChat);
    assert!(!cancelled.ready_to_execute);
    assert!(store.is_empty().await);

    // The next message is classified from scratch.
    let next = orchestrator.resolve("Ikea", &ctx).await;
    assert_eq!(next.intent, Intent::GeneralChat);
}

#[tokio::test]
async fn payroll_month_answer_sets_year_too() {
    let (orchestrator, _) = rules_only();
    let ctx = session("acme-books", "user-1");

    let first = orchestrator.resolve("run payroll", &ctx).await;
    assert_eq!(first.status, Some(MissingFieldStatus::WaitingForPayrollMonth));

    let second = orchestrator.resolve("march 2025", &ctx).await;
    assert_eq!(second.intent, Intent::RunPayroll);
    assert!(second.ready_to_execute);
    assert_eq!(to_json(&second)["data"], json!({"month": 3, "year": 2025}));
}

#[tokio::test]
async fn inapplicable_pending_status_is_discarded() {
    let (orchestrator, store) = rules_only();
    let ctx = session("acme-books", "user-1");

    // A journal payload can never answer a customer question.
    store
        .set(
            &ctx.session_key(),
            PendingDraft::new(
                Intent::CreateJournal,
                DraftData::empty_for(Intent::CreateJournal),
                MissingFieldStatus::WaitingForCustomer,
                vec![],
            ),
        )
        .await
        .unwrap();

    let draft = orchestrator.resolve("rent 50000", &ctx).await;
    assert_eq!(draft.intent, Intent::CreateJournal);
    assert!(draft.ready_to_execute);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn sessions_do_not_share_pending_drafts() {
    let (orchestrator, _) = rules_only();
    let alice = session("acme-books", "alice");
    let bob = session("acme-books", "bob");

    orchestrator.resolve("sold 10 widgets at 100", &alice).await;

    let bob_reply = orchestrator.resolve("Acme", &bob).await;
    assert_eq!(bob_reply.intent, Intent::GeneralChat);

    let alice_reply = orchestrator.resolve("Acme", &alice).await;
    assert_eq!(alice_reply.intent, Intent::CreateInvoice);
    assert_eq!(to_json(&alice_reply)["data"]["partnerName"], "Acme");
}

#[tokio::test]
async fn anonymous_sessions_share_one_slot() {
    let (orchestrator, store) = rules_only();
    let anonymous = SessionContext::anonymous();

    orchestrator.resolve("run payroll", &anonymous).await;
    assert_eq!(store.len().await, 1);

    let reply = orchestrator.resolve("april 2025", &anonymous).await;
    assert!(reply.ready_to_execute);
}

// =============================================================================
// Directory hints
// =============================================================================

#[tokio::test]
async fn questions_list_known_vendors() {
    let store = Arc::new(InMemoryPendingStore::new());
    let directory = InMemoryTenantDirectory::new().with_tenant(
        &TenantId::new("acme-books").unwrap(),
        TenantHints {
            vendors: vec!["Ikea".into(), "Metro".into()],
            ..Default::default()
        },
    );
    let orchestrator = DraftOrchestrator::new(store).with_directory(Arc::new(directory));

    let draft = orchestrator
        .resolve("purchase order for 10 chairs at 50 sku ch-1", &session("acme-books", "user-1"))
        .await;
    assert!(draft.message.contains("Known vendors: Ikea, Metro."), "{}", draft.message);

    let other_tenant = orchestrator
        .resolve("purchase order for 10 chairs at 50 sku ch-1", &session("zeta", "user-1"))
        .await;
    assert!(!other_tenant.message.contains("Known vendors"));
}

// =============================================================================
// Model-assisted path
// =============================================================================

#[tokio::test]
async fn model_failure_is_invisible() {
    let store = Arc::new(InMemoryPendingStore::new());
    let provider = MockAIProvider::new().with_error(MockError::RateLimited {
        retry_after_secs: 30,
    });
    let with_model = DraftOrchestrator::new(store).with_ai_provider(Arc::new(provider));
    let (without_model, _) = rules_only();

    let text = "sold 10 widgets to Acme at 100 on cash sku SKU-1";
    let a = with_model.resolve(text, &session("t", "u")).await;
    let b = without_model.resolve(text, &session("t", "u")).await;

    assert_eq!(a, b);
}

#[tokio::test]
async fn model_candidate_goes_through_validation() {
    let store = Arc::new(InMemoryPendingStore::new());
    let provider = MockAIProvider::new().with_response(
        "```json\n{\"intent\":\"create_purchase_order\",\"confidence\":0.8,\"data\":{\"supplierName\":\"Ikea\",\"items\":[{\"productName\":\"Desks\",\"quantity\":2,\"unitPrice\":300}]}}\n```",
    );
    let orchestrator = DraftOrchestrator::new(store).with_ai_provider(Arc::new(provider));
    let ctx = session("acme-books", "user-1");

    let first = orchestrator.resolve("get two desks from ikea", &ctx).await;
    assert_eq!(first.intent, Intent::CreatePurchaseOrder);
    assert_eq!(first.status, Some(MissingFieldStatus::WaitingForSku));
    assert_eq!(first.confidence, Some(0.8));

    // Follow-up answers never reach the model.
    let second = orchestrator.resolve("auto", &ctx).await;
    assert!(second.ready_to_execute);
    match &second.data {
        DraftData::PurchaseOrder(po) => assert_eq!(po.total, Some(600.0)),
        other => panic!("unexpected payload {:?}", other),
    }
}

// =============================================================================
// Posting
// =============================================================================

#[tokio::test]
async fn ready_draft_can_be_posted() {
    let (orchestrator, _) = rules_only();
    let ctx = session("acme-books", "user-1");
    let draft = orchestrator.resolve("rent 50000", &ctx).await;

    let poster = Arc::new(InMemoryDraftPoster::new());
    let handler = ExecuteDraftHandler::new(poster.clone());
    let receipt = handler
        .handle(ExecuteDraftCommand {
            tenant_id: TenantId::new("acme-books").unwrap(),
            draft,
        })
        .await
        .unwrap();

    let posted = poster.posted(&TenantId::new("acme-books").unwrap()).await;
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].receipt.posting_id, receipt.posting_id);
}
