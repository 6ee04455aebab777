//! Page controller behaviour: validation short-circuits, success and failure
//! messages, input resets, navigation and listing refreshes.

mod common;

use std::sync::Arc;

use common::{CountingStore, FailingStore};
use toolshelf_api::controllers::{
    AddCategoryController, AddToolController, HomeController, UpdateCategoryController,
    UpdateToolController, HOME_PATH,
};
use toolshelf_core::submission::SubmissionPhase;
use toolshelf_core::{category, tool};
use toolshelf_db::models::tool::CreateTool;
use toolshelf_db::repositories::{CategoryRepo, ToolRepo};
use toolshelf_db::store::DocumentStore;

fn counting_repos() -> (Arc<CountingStore>, CategoryRepo, ToolRepo) {
    let store = Arc::new(CountingStore::default());
    let dyn_store: Arc<dyn DocumentStore> = store.clone();
    (
        store,
        CategoryRepo::new(Arc::clone(&dyn_store)),
        ToolRepo::new(dyn_store),
    )
}

fn failing_repos() -> (CategoryRepo, ToolRepo) {
    let store: Arc<dyn DocumentStore> = Arc::new(FailingStore);
    (CategoryRepo::new(Arc::clone(&store)), ToolRepo::new(store))
}

// ---------------------------------------------------------------------------
// Validation never reaches the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_titles_fail_without_store_calls() {
    let (store, categories, tools) = counting_repos();

    for title in ["", " ", "\t\n  "] {
        let mut add_category = AddCategoryController::new(categories.clone());
        add_category.set_title(title);
        add_category.submit().await;
        assert_eq!(add_category.status().phase, SubmissionPhase::Failed);
        assert_eq!(
            add_category.status().error.as_deref(),
            Some(category::MSG_TITLE_REQUIRED)
        );

        let mut update_category = UpdateCategoryController::new(categories.clone(), "some-id");
        update_category.set_title(title);
        update_category.submit().await;
        assert_eq!(update_category.status().phase, SubmissionPhase::Failed);

        let mut add_tool = AddToolController::new(tools.clone(), categories.clone());
        add_tool.set_title(title);
        add_tool.set_description("desc");
        add_tool.submit().await;
        assert_eq!(add_tool.status().phase, SubmissionPhase::Failed);

        let mut update_tool = UpdateToolController::new(tools.clone(), "some-id");
        update_tool.set_title(title);
        update_tool.submit().await;
        assert_eq!(update_tool.status().phase, SubmissionPhase::Failed);
    }

    assert_eq!(store.calls(), 0);
}

// ---------------------------------------------------------------------------
// Create flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_category_success_resets_title() {
    let (store, categories, _) = counting_repos();
    let mut controller = AddCategoryController::new(categories.clone());
    controller.set_title("Editors");
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Succeeded);
    assert_eq!(view.status.message.as_deref(), Some(category::MSG_ADDED));
    assert!(view.status.error.is_none());
    assert_eq!(view.title, "");
    assert!(view.can_submit);
    assert_eq!(store.calls(), 1);

    let listed = categories.list(10).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Editors");
}

#[tokio::test]
async fn add_category_store_failure_keeps_input() {
    let (categories, _) = failing_repos();
    let mut controller = AddCategoryController::new(categories);
    controller.set_title("Editors");
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Failed);
    assert_eq!(view.status.error.as_deref(), Some(category::MSG_ADD_FAILED));
    assert_eq!(view.title, "Editors");
    assert!(view.can_submit);
}

#[tokio::test]
async fn resubmission_after_failure_clears_error() {
    let (_, categories, _) = counting_repos();
    let mut controller = AddCategoryController::new(categories);

    controller.submit().await;
    assert_eq!(controller.status().phase, SubmissionPhase::Failed);

    controller.set_title("Editors");
    controller.submit().await;
    assert_eq!(controller.status().phase, SubmissionPhase::Succeeded);
    assert!(controller.status().error.is_none());
}

#[tokio::test]
async fn add_tool_offers_categories_and_redirects_home() {
    let (_, categories, tools) = counting_repos();
    let category_id = categories.create("Editors").await.unwrap();

    let mut controller = AddToolController::new(tools.clone(), categories.clone());
    controller.load_categories(100).await;
    assert_eq!(controller.view().categories.len(), 1);
    assert!(controller.view().redirect.is_none());

    controller.set_title("VSCode");
    controller.set_description("Editor");
    controller.set_category_id(category_id.clone());
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Succeeded);
    assert_eq!(view.status.message.as_deref(), Some(tool::MSG_ADDED));
    assert_eq!(view.redirect.as_deref(), Some(HOME_PATH));
    assert_eq!(view.title, "");
    assert_eq!(view.description, "");
    assert_eq!(view.category_id, "");

    let stored = tools.list(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].category_id, category_id);
}

#[tokio::test]
async fn add_tool_without_category_is_allowed() {
    let (_, categories, tools) = counting_repos();
    let mut controller = AddToolController::new(tools.clone(), categories);
    controller.set_title("grep");
    controller.submit().await;

    assert_eq!(controller.status().phase, SubmissionPhase::Succeeded);
    assert_eq!(tools.list(10).await.unwrap()[0].category_id, "");
}

#[tokio::test]
async fn add_tool_store_failure_does_not_redirect() {
    let (categories, tools) = failing_repos();
    let mut controller = AddToolController::new(tools, categories);
    controller.load_categories(100).await;
    assert_eq!(
        controller.status().error.as_deref(),
        Some(category::MSG_LIST_FAILED)
    );

    controller.set_title("VSCode");
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Failed);
    assert_eq!(view.status.error.as_deref(), Some(tool::MSG_ADD_FAILED));
    assert!(view.redirect.is_none());
}

// ---------------------------------------------------------------------------
// Update flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_category_prefills_and_saves() {
    let (_, categories, _) = counting_repos();
    let id = categories.create("Editors").await.unwrap();

    let mut controller = UpdateCategoryController::new(categories.clone(), id.clone());
    controller.load().await;
    assert_eq!(controller.view().title, "Editors");

    controller.set_title("Text Editors");
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Succeeded);
    assert_eq!(view.status.message.as_deref(), Some(category::MSG_UPDATED));
    assert_eq!(view.title, "Text Editors");
    assert_eq!(categories.get_by_id(&id).await.unwrap().title, "Text Editors");
}

#[tokio::test]
async fn update_category_missing_id_reports_not_found() {
    let (_, categories, _) = counting_repos();

    let mut controller = UpdateCategoryController::new(categories.clone(), "missing");
    controller.load().await;
    let view = controller.view();
    assert_eq!(view.status.error.as_deref(), Some(category::MSG_NOT_FOUND));
    assert!(!view.can_submit);

    let mut controller = UpdateCategoryController::new(categories, "missing");
    controller.set_title("Anything");
    controller.submit().await;
    assert_eq!(controller.status().phase, SubmissionPhase::Failed);
    assert_eq!(
        controller.status().error.as_deref(),
        Some(category::MSG_NOT_FOUND)
    );
}

#[tokio::test]
async fn update_category_store_failure_is_generic() {
    let (categories, _) = failing_repos();
    let mut controller = UpdateCategoryController::new(categories, "id");
    controller.load().await;
    assert_eq!(
        controller.status().error.as_deref(),
        Some(category::MSG_FETCH_FAILED)
    );

    controller.set_title("Editors");
    controller.submit().await;
    assert_eq!(
        controller.status().error.as_deref(),
        Some(category::MSG_UPDATE_FAILED)
    );
}

#[tokio::test]
async fn update_tool_changes_description_only() {
    let (_, categories, tools) = counting_repos();
    let category_id = categories.create("Editors").await.unwrap();
    let tool_id = tools
        .create(&CreateTool {
            title: "VSCode".to_string(),
            description: "Editor".to_string(),
            category_id: category_id.clone(),
        })
        .await
        .unwrap();

    let mut controller = UpdateToolController::new(tools.clone(), tool_id.clone());
    controller.load().await;
    assert_eq!(controller.view().title, "VSCode");
    assert_eq!(controller.view().category_id, category_id);

    controller.set_description("Code editor");
    controller.submit().await;

    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Succeeded);
    assert_eq!(view.redirect.as_deref(), Some(HOME_PATH));

    let stored = tools.get_by_id(&tool_id).await.unwrap();
    assert_eq!(stored.title, "VSCode");
    assert_eq!(stored.description, "Code editor");
    assert_eq!(stored.category_id, category_id);
}

#[tokio::test]
async fn update_tool_missing_id_reports_not_found() {
    let (_, _, tools) = counting_repos();
    let mut controller = UpdateToolController::new(tools, "missing");
    controller.load().await;
    assert_eq!(controller.status().error.as_deref(), Some(tool::MSG_NOT_FOUND));

    controller.set_title("Title");
    controller.submit().await;
    let view = controller.view();
    assert_eq!(view.status.phase, SubmissionPhase::Failed);
    assert!(view.redirect.is_none());
    assert!(!view.can_submit);
}

// ---------------------------------------------------------------------------
// Home listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_is_loading_until_both_lists_resolve() {
    let (_, categories, tools) = counting_repos();
    let mut controller = HomeController::new(categories, tools, 10);
    assert!(controller.is_loading());

    controller.refresh_categories().await;
    assert!(controller.is_loading());

    controller.refresh_tools().await;
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn home_loading_clears_on_failure() {
    let (categories, tools) = failing_repos();
    let mut controller = HomeController::new(categories, tools, 10);
    controller.load().await;

    assert!(!controller.is_loading());
    assert!(controller.error().is_some());
    assert!(controller.categories().is_empty());
}

#[tokio::test]
async fn home_lists_at_most_limit() {
    let (_, categories, tools) = counting_repos();
    for n in 0..12 {
        categories.create(&format!("Category {n}")).await.unwrap();
    }

    let mut controller = HomeController::new(categories, tools, 10);
    controller.load().await;
    assert_eq!(controller.categories().len(), 10);
    assert_eq!(
        controller.view().categories[0].update_path,
        format!("/update-category?categoryId={}", controller.categories()[0].id)
    );
}

#[tokio::test]
async fn home_delete_refetches_and_keeps_tools() {
    let (_, categories, tools) = counting_repos();
    let category_id = categories.create("Editors").await.unwrap();
    tools
        .create(&CreateTool {
            title: "Vim".to_string(),
            description: String::new(),
            category_id: category_id.clone(),
        })
        .await
        .unwrap();

    let mut controller = HomeController::new(categories, tools, 10);
    controller.load().await;
    assert_eq!(controller.categories().len(), 1);

    controller.delete_category(&category_id).await;
    assert!(controller.categories().is_empty());
    assert_eq!(controller.message(), Some(category::MSG_DELETED));
    assert_eq!(controller.tools().len(), 1);
    assert_eq!(controller.tools()[0].category_id, category_id);
}

#[tokio::test]
async fn deleting_twice_is_not_fatal() {
    let (_, categories, tools) = counting_repos();
    let tool_id = tools
        .create(&CreateTool {
            title: "make".to_string(),
            description: String::new(),
            category_id: String::new(),
        })
        .await
        .unwrap();

    let mut controller = HomeController::new(categories, tools, 10);
    controller.load().await;
    controller.delete_tool(&tool_id).await;
    controller.delete_tool(&tool_id).await;

    assert!(controller.error().is_none());
    assert_eq!(controller.message(), Some(tool::MSG_DELETED));
    assert!(controller.tools().is_empty());
}

#[tokio::test]
async fn delete_failure_is_reported_as_message() {
    let (categories, tools) = failing_repos();
    let mut controller = HomeController::new(categories, tools, 10);
    controller.delete_category("any").await;

    assert_eq!(controller.error(), Some(category::MSG_DELETE_FAILED));
    assert!(controller.message().is_none());
}

#[tokio::test]
async fn delete_failure_survives_failed_list_refresh() {
    let (categories, tools) = failing_repos();
    let mut controller = HomeController::new(categories, tools, 10);
    controller.delete_tool("any").await;
    controller.finish_loading().await;

    assert!(!controller.is_loading());
    assert_eq!(controller.error(), Some(tool::MSG_DELETE_FAILED));
    assert!(controller.message().is_none());
}
