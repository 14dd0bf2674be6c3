//! Profile display unit.
//!
//! A [`UserProfile`] tracks which user is being shown and which of the three
//! views is current. Rendering is a pure function of the [`ProfileView`].

use tracing::debug;

use crate::domain::{FetchOutcome, User, UserFetcher, UserId};

/// Values derived once a user has been retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    user: User,
    is_admin: bool,
    greeting: String,
}

impl LoadedProfile {
    /// Derive the admin flag and greeting for `user`.
    pub fn new(user: User) -> Self {
        let is_admin = user.is_admin();
        let greeting = user.greeting();
        Self {
            user,
            is_admin,
            greeting,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn greeting(&self) -> &str {
        self.greeting.as_str()
    }

    /// Uppercased role label.
    pub fn role_label(&self) -> &'static str {
        self.user.role().display_label()
    }

    /// CSS class distinguishing admin profiles.
    pub fn css_class(&self) -> &'static str {
        if self.is_admin {
            "admin-profile"
        } else {
            "user-profile"
        }
    }
}

/// The three states a profile can be in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileView {
    /// Waiting for a retrieval to resolve.
    #[default]
    Loading,
    /// The retrieval resolved without a user.
    NotFound,
    /// The retrieval resolved with a user.
    Loaded(LoadedProfile),
}

impl ProfileView {
    /// Map a retrieval outcome onto a terminal view.
    ///
    /// Failures and missing records both become [`ProfileView::NotFound`].
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome.into_data() {
            Some(user) => Self::Loaded(LoadedProfile::new(user)),
            None => Self::NotFound,
        }
    }
}

/// Profile bound to one user identifier at a time.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_profile::domain::ports::FixtureUserSource;
/// use user_profile::domain::{ProfileView, UserFetcher, UserId, UserProfile, render};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let fetcher = UserFetcher::with_tracing(Arc::new(FixtureUserSource));
/// let mut profile = UserProfile::new(UserId::new(42));
/// assert_eq!(profile.view(), &ProfileView::Loading);
///
/// profile.refresh(&fetcher).await;
/// assert!(render(profile.view()).contains("Hello, Ada!"));
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    user_id: UserId,
    view: ProfileView,
}

impl UserProfile {
    /// Start a profile in the loading state.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            view: ProfileView::Loading,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn view(&self) -> &ProfileView {
        &self.view
    }

    /// Whether the profile is waiting on a retrieval.
    pub fn needs_fetch(&self) -> bool {
        matches!(self.view, ProfileView::Loading)
    }

    /// Switch to another user, resetting to loading when the id changes.
    ///
    /// Returns `true` when a new retrieval is required.
    pub fn set_user_id(&mut self, user_id: UserId) -> bool {
        if self.user_id == user_id {
            return false;
        }
        debug!(from = %self.user_id, to = %user_id, "profile user changed");
        self.user_id = user_id;
        self.view = ProfileView::Loading;
        true
    }

    /// Apply a resolved retrieval outcome.
    pub fn resolve(&mut self, outcome: FetchOutcome) {
        self.view = ProfileView::from_outcome(outcome);
    }

    /// Retrieve the current user and resolve the view.
    ///
    /// Holding `&mut self` across the await keeps a profile to a single
    /// in-flight retrieval.
    pub async fn refresh(&mut self, fetcher: &UserFetcher) {
        self.view = ProfileView::Loading;
        let outcome = fetcher.fetch_user(self.user_id).await;
        self.resolve(outcome);
    }

    /// Render the current view.
    pub fn render(&self) -> String {
        render(&self.view)
    }
}

/// Render a view as a single line of markup.
///
/// # Examples
/// ```
/// use user_profile::domain::{ProfileView, render};
///
/// assert_eq!(render(&ProfileView::Loading), "<div>Loading...</div>");
/// assert_eq!(render(&ProfileView::NotFound), "<div>User not found</div>");
/// ```
pub fn render(view: &ProfileView) -> String {
    match view {
        ProfileView::Loading => "<div>Loading...</div>".to_owned(),
        ProfileView::NotFound => "<div>User not found</div>".to_owned(),
        ProfileView::Loaded(profile) => render_loaded(profile),
    }
}

fn render_loaded(profile: &LoadedProfile) -> String {
    format!(
        "<div class=\"{class}\"><h1>{greeting}</h1><p>Email: {email}</p><span>Role: {role}</span></div>",
        class = profile.css_class(),
        greeting = escape_html(profile.greeting()),
        email = escape_html(profile.user().email()),
        role = profile.role_label(),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
