//! Integration tests for the packaging advisor chat.
//!
//! Run with: cargo test -p turanpet-integration-tests --test assistant

use reqwest::StatusCode;

use turanpet_integration_tests::{MockReply, TEST_API_KEY, TestContext, location};
use turanpet_site::config::DEFAULT_TEXT_MODEL;

const QUESTION: &str = "Which strap holds a 900 kg brick pallet?";

fn user_entry(text: &str) -> String {
    format!("<li class=\"message message-user\">{text}</li>")
}

async fn open_on(ctx: &TestContext, page: &str) {
    let resp = ctx
        .post_form("/assistant/open", &[("return_to", page)])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_chat_is_hidden_until_opened() {
    let ctx = TestContext::new().await;

    let body = ctx.page("/about").await;

    assert!(!body.contains("id=\"assistant\""));
}

#[tokio::test]
async fn test_open_greets_and_returns_to_page() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .post_form("/assistant/open", &[("return_to", "/about")])
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/about#assistant"));

    let body = ctx.page("/about").await;
    assert!(body.contains("id=\"assistant\""));
    assert!(body.contains("<strong>StrapMaster</strong>"));
    assert!(body.contains("What is the break strength of 19mm PET?"));
}

#[tokio::test]
async fn test_open_with_hostile_return_path_stays_on_site() {
    let ctx = TestContext::new().await;

    for return_to in ["/\t/evil.example", "/\x01x"] {
        let resp = ctx
            .post_form("/assistant/open", &[("return_to", return_to)])
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{return_to:?}");
        assert_eq!(location(&resp).as_deref(), Some("/#assistant"), "{return_to:?}");
    }
}

#[tokio::test]
async fn test_chat_follows_visitor_across_pages() {
    let ctx = TestContext::new().await;
    open_on(&ctx, "/").await;

    for path in ["/catalog", "/blog", "/contact"] {
        let body = ctx.page(path).await;
        assert!(body.contains("id=\"assistant\""), "{path}");
    }
}

#[tokio::test]
async fn test_question_is_answered() {
    let ctx = TestContext::new().await;
    open_on(&ctx, "/catalog").await;

    let resp = ctx
        .post_form(
            "/assistant/messages",
            &[("query", QUESTION), ("return_to", "/catalog")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/catalog#assistant"));

    let body = ctx.page("/catalog").await;
    assert!(body.contains(&user_entry(QUESTION)));
    assert!(body.contains("1,400 lbs typical for 19mm embossed PET."));
    assert!(!body.contains("http-equiv=\"refresh\""));
    // Suggestions are only offered to a fresh chat
    assert!(!body.contains("What is the break strength of 19mm PET?"));

    let calls = ctx.gemini.calls_to(DEFAULT_TEXT_MODEL);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(calls[0].prompt(), Some(QUESTION));
    assert!(
        calls[0]
            .system_instruction()
            .is_some_and(|s| s.contains("StrapMaster"))
    );
}

#[tokio::test]
async fn test_russian_question_carries_language_hint() {
    let ctx = TestContext::new().await;
    ctx.post_form("/language", &[("lang", "ru"), ("return_to", "/")])
        .await;
    open_on(&ctx, "/").await;

    ctx.post_form(
        "/assistant/messages",
        &[("query", "ПЭТ или сталь?"), ("return_to", "/")],
    )
    .await;

    let calls = ctx.gemini.calls_to(DEFAULT_TEXT_MODEL);
    assert_eq!(
        calls[0].prompt(),
        Some("ПЭТ или сталь? (Please answer in Russian language)")
    );
}

#[tokio::test]
async fn test_upstream_failure_shows_error_entry() {
    let ctx = TestContext::new().await;
    ctx.gemini
        .reply_text_with(MockReply::Status(StatusCode::SERVICE_UNAVAILABLE));
    open_on(&ctx, "/").await;

    ctx.post_form("/assistant/messages", &[("query", QUESTION), ("return_to", "/")])
        .await;

    let body = ctx.page("/").await;
    assert!(body.contains(&user_entry(QUESTION)));
    assert!(body.contains("message-error"));
    assert!(body.contains("Communication error with logistics server."));
}

#[tokio::test]
async fn test_empty_reply_uses_fallback() {
    let ctx = TestContext::new().await;
    ctx.gemini.reply_text_with(MockReply::Empty);
    open_on(&ctx, "/").await;

    ctx.post_form("/assistant/messages", &[("query", QUESTION), ("return_to", "/")])
        .await;

    let body = ctx.page("/").await;
    assert!(body.contains("couldn"));
    assert!(body.contains("generate advice at this moment."));
    assert!(!body.contains("message-error"));
}

#[tokio::test]
async fn test_blank_question_is_ignored() {
    let ctx = TestContext::new().await;
    open_on(&ctx, "/").await;

    let resp = ctx
        .post_form("/assistant/messages", &[("query", "   "), ("return_to", "/")])
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/#assistant"));

    assert!(ctx.gemini.calls().is_empty());
    let body = ctx.page("/").await;
    assert!(!body.contains("message-user"));
}

#[tokio::test]
async fn test_close_dismisses_chat() {
    let ctx = TestContext::new().await;
    open_on(&ctx, "/about").await;

    let resp = ctx
        .post_form("/assistant/close", &[("return_to", "/about")])
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/about"));

    let body = ctx.page("/about").await;
    assert!(!body.contains("id=\"assistant\""));

    // Questions to a dismissed chat never reach the model
    ctx.post_form("/assistant/messages", &[("query", QUESTION), ("return_to", "/")])
        .await;
    assert!(ctx.gemini.calls().is_empty());
}

#[tokio::test]
async fn test_reopen_starts_fresh_transcript() {
    let ctx = TestContext::new().await;
    open_on(&ctx, "/").await;
    ctx.post_form("/assistant/messages", &[("query", QUESTION), ("return_to", "/")])
        .await;
    ctx.post_form("/assistant/close", &[("return_to", "/")])
        .await;

    open_on(&ctx, "/").await;

    let body = ctx.page("/").await;
    assert!(body.contains("<strong>StrapMaster</strong>"));
    assert!(!body.contains(&user_entry(QUESTION)));
}

#[tokio::test]
async fn test_model_endpoints_are_rate_limited() {
    let ctx = TestContext::new().await;

    let mut statuses = Vec::new();
    for _ in 0..11 {
        let resp = ctx
            .post_form("/assistant/messages", &[("query", QUESTION), ("return_to", "/")])
            .await;
        statuses.push(resp.status());
    }

    assert!(statuses[..10].iter().all(|s| *s == StatusCode::SEE_OTHER));
    assert_eq!(statuses[10], StatusCode::TOO_MANY_REQUESTS);
}
