//! The server-rendered board: one tab per category, cards for the active one,
//! and the add/edit form when submissions are open.
//!
//! Every request re-reads the repository; nothing is cached between renders.

use std::sync::LazyLock;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use recboard_core::models::category::Category;
use recboard_core::models::recommendation::{
    filter_by_category, Recommendation, RecommendationInput,
};
use recboard_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

const TEMPLATE_NAME: &str = "board.html";
const TEMPLATE: &str = include_str!("../../templates/board.html.tera");

static TEMPLATES: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tera)
});

/// The compiled board templates, parsed on first use.
pub fn templates() -> Result<&'static Tera, tera::Error> {
    TEMPLATES
        .as_ref()
        .map_err(|e| tera::Error::msg(format!("board template failed to compile: {e}")))
}

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub category: Option<String>,
    /// Id of the recommendation to load into the form.
    pub edit: Option<String>,
}

/// Fields posted by the board form. An unchecked checkbox is simply absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardForm {
    #[serde(default)]
    pub id: Option<String>,
    pub category: String,
    #[serde(default)]
    pub recommended_by: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub follow_regularly: Option<String>,
}

impl BoardForm {
    fn into_input(self) -> Result<(Option<String>, RecommendationInput), ApiError> {
        let input = RecommendationInput {
            category: self.category.parse()?,
            recommended_by: self.recommended_by,
            title: self.title,
            link: self.link,
            notes: self.notes,
            follow_regularly: self.follow_regularly.is_some(),
        };
        input.validate()?;
        let id = self.id.filter(|id| !id.trim().is_empty());
        Ok((id, input))
    }
}

#[derive(Serialize)]
struct TabView {
    slug: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct CardView<'a> {
    id: &'a str,
    category: &'static str,
    title: &'a str,
    notes: &'a str,
    recommended_by: &'a str,
    /// Only http(s) links become anchors.
    href: Option<&'a str>,
    follow_regularly: bool,
}

#[derive(Serialize)]
struct OptionView {
    slug: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct FormView<'a> {
    /// Present when editing an existing recommendation.
    id: Option<&'a str>,
    options: Vec<OptionView>,
    values: RecommendationInput,
}

#[derive(Serialize)]
struct BoardView<'a> {
    tabs: Vec<TabView>,
    active_label: &'static str,
    cards: Vec<CardView<'a>>,
    submissions_enabled: bool,
    form: Option<FormView<'a>>,
}

pub async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, ApiError> {
    // Unknown or absent tab names fall back to the first tab.
    let active: Category = query
        .category
        .as_deref()
        .and_then(|c| c.parse().ok())
        .unwrap_or_default();

    let items = state.repo.list().await;
    let editing = query.edit.as_deref().and_then(|id| {
        let id = id.trim();
        items.iter().find(|r| r.id == id)
    });
    let html = render_board(&items, active, state.config.submissions_enabled, editing)?;
    Ok(Html(html))
}

/// `POST /board`: add, or update when the form carries an id, then send the
/// browser back to the tab of the saved item.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Form<BoardForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    if !state.config.submissions_enabled {
        return Err(ApiError::Forbidden(
            "Submissions are currently disabled.".to_string(),
        ));
    }

    let Form(form) = payload?;
    let (id, input) = form.into_input()?;

    match id {
        None => {
            if !state.repo.add(&input).await {
                return Err(ApiError::Internal("failed to add recommendation".to_string()));
            }
        }
        Some(id) => match state.repo.try_update(&id, &input).await {
            Ok(()) => {}
            Err(StorageError::NotFound { id }) => {
                tracing::warn!(id = %id, "form update target not found");
                return Err(ApiError::NotFound(format!("recommendation not found: {id}")));
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(Redirect::to(&format!("/?category={}", input.category.as_str())))
}

pub fn render_board(
    items: &[Recommendation],
    active: Category,
    submissions_enabled: bool,
    editing: Option<&Recommendation>,
) -> Result<String, tera::Error> {
    let form = submissions_enabled.then(|| form_view(active, editing));
    let view = BoardView {
        tabs: Category::ALL
            .into_iter()
            .map(|c| TabView {
                slug: c.as_str(),
                label: c.label(),
                active: c == active,
            })
            .collect(),
        active_label: active.label(),
        cards: filter_by_category(items, active)
            .into_iter()
            .map(card)
            .collect(),
        submissions_enabled,
        form,
    };

    templates()?.render(TEMPLATE_NAME, &Context::from_serialize(&view)?)
}

fn form_view(active: Category, editing: Option<&Recommendation>) -> FormView<'_> {
    let values = match editing {
        Some(item) => item.to_input(),
        None => RecommendationInput {
            category: active,
            recommended_by: String::new(),
            title: String::new(),
            link: String::new(),
            notes: String::new(),
            follow_regularly: false,
        },
    };
    FormView {
        id: editing.map(|item| item.id.as_str()),
        options: Category::ALL
            .into_iter()
            .map(|c| OptionView {
                slug: c.as_str(),
                label: c.label(),
                selected: c == values.category,
            })
            .collect(),
        values,
    }
}

fn card(item: &Recommendation) -> CardView<'_> {
    let link = item.link.trim();
    let href = (link.starts_with("https://") || link.starts_with("http://")).then_some(link);
    CardView {
        id: &item.id,
        category: item.category.as_str(),
        title: &item.title,
        notes: &item.notes,
        recommended_by: &item.recommended_by,
        href,
        follow_regularly: item.follow_regularly,
    }
}
