//! Classification of audited requests into (action, content type) pairs.

use devtrack_domain::activity::{ActionType, ContentType};

use crate::domain::types::AuthEventKind;

/// What the audit middleware saw of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFacts {
    /// Upper-case HTTP method.
    pub method: String,
    pub path: String,
    /// Name of the matched route, if routing resolved one.
    pub route_name: Option<&'static str>,
    /// Raw path parameters as captured by the router.
    pub path_params: Vec<(String, String)>,
}

/// Result of classifying one auditable interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub action_type: ActionType,
    pub content_type: ContentType,
    pub object_id: Option<i64>,
    pub description: String,
}

impl Classification {
    pub fn for_auth_event(kind: AuthEventKind) -> Self {
        let (action_type, description) = match kind {
            AuthEventKind::Login => (ActionType::Login, "user login"),
            AuthEventKind::Logout => (ActionType::Logout, "user logout"),
        };
        Self {
            action_type,
            content_type: ContentType::User,
            object_id: None,
            description: description.to_owned(),
        }
    }
}

/// How an HTTP method maps to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResolver {
    Fixed(ActionType),
    /// `marked` when the path contains any marker, `default` otherwise.
    UnlessMarked {
        default: ActionType,
        marked: ActionType,
        markers: Vec<String>,
    },
}

impl ActionResolver {
    fn resolve(&self, path: &str) -> ActionType {
        match self {
            Self::Fixed(action) => *action,
            Self::UnlessMarked {
                default,
                marked,
                markers,
            } => {
                if markers.iter().any(|m| path.contains(m.as_str())) {
                    *marked
                } else {
                    *default
                }
            }
        }
    }
}

/// Immutable rule tables owned by one audit pipeline.
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    /// Requests under these prefixes are never logged.
    pub ignored_prefixes: Vec<String>,
    /// Login/logout paths. Their entries come from auth events only.
    pub auth_event_prefixes: Vec<String>,
    /// Ordered; first matching prefix wins.
    pub content_prefixes: Vec<(String, ContentType)>,
    pub fallback_content: ContentType,
    pub methods: Vec<(String, ActionResolver)>,
    pub fallback_action: ActionType,
    /// Route-name fragments that mark a single-object route.
    pub object_route_markers: Vec<String>,
    pub object_id_param: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for ClassificationRules {
    fn default() -> Self {
        let content_prefixes = [
            ("/device-arrival/", ContentType::DeviceArrival),
            ("/device-delivery/", ContentType::DeviceDelivery),
            ("/device-security-status/", ContentType::DeviceSecurity),
            ("/users/", ContentType::User),
            ("/login/", ContentType::User),
            ("/logout/", ContentType::User),
            ("/register/", ContentType::User),
            ("/profile/", ContentType::User),
            ("/dashboard/", ContentType::System),
        ]
        .into_iter()
        .map(|(prefix, content)| (prefix.to_owned(), content))
        .collect();

        let methods = vec![
            (
                "GET".to_owned(),
                ActionResolver::UnlessMarked {
                    default: ActionType::View,
                    marked: ActionType::Export,
                    markers: owned(&["/export", "/download"]),
                },
            ),
            (
                "POST".to_owned(),
                ActionResolver::UnlessMarked {
                    default: ActionType::Create,
                    marked: ActionType::Import,
                    markers: owned(&["/import/"]),
                },
            ),
            ("PUT".to_owned(), ActionResolver::Fixed(ActionType::Update)),
            (
                "PATCH".to_owned(),
                ActionResolver::Fixed(ActionType::Update),
            ),
            (
                "DELETE".to_owned(),
                ActionResolver::Fixed(ActionType::Delete),
            ),
        ];

        Self {
            ignored_prefixes: owned(&[
                "/static/",
                "/media/",
                "/admin/jsi18n/",
                "/__debug__/",
                "/internal/",
            ]),
            auth_event_prefixes: owned(&["/login/", "/logout/"]),
            content_prefixes,
            fallback_content: ContentType::System,
            methods,
            fallback_action: ActionType::Other,
            object_route_markers: owned(&["detail", "update", "delete"]),
            object_id_param: "pk".to_owned(),
        }
    }
}

impl ClassificationRules {
    pub fn should_log(&self, path: &str) -> bool {
        let starts = |prefixes: &[String]| prefixes.iter().any(|p| path.starts_with(p.as_str()));
        !starts(&self.ignored_prefixes) && !starts(&self.auth_event_prefixes)
    }

    pub fn content_type(&self, path: &str) -> ContentType {
        self.content_prefixes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map_or(self.fallback_content, |(_, content)| *content)
    }

    pub fn action_type(&self, method: &str, path: &str) -> ActionType {
        self.methods
            .iter()
            .find(|(m, _)| m.eq_ignore_ascii_case(method))
            .map_or(self.fallback_action, |(_, resolver)| resolver.resolve(path))
    }

    /// Primary key of the addressed object on detail/update/delete routes.
    ///
    /// Non-numeric keys are treated as absent.
    pub fn object_id(&self, facts: &RequestFacts) -> Option<i64> {
        let route = facts.route_name?;
        if !self
            .object_route_markers
            .iter()
            .any(|m| route.contains(m.as_str()))
        {
            return None;
        }
        facts
            .path_params
            .iter()
            .find(|(name, _)| *name == self.object_id_param)
            .and_then(|(_, value)| value.parse().ok())
    }

    /// `None` when the request must not produce an entry.
    pub fn classify(&self, facts: &RequestFacts) -> Option<Classification> {
        if !self.should_log(&facts.path) {
            return None;
        }
        let action_type = self.action_type(&facts.method, &facts.path);
        let content_type = self.content_type(&facts.path);
        let object_id = self.object_id(facts);
        Some(Classification {
            action_type,
            content_type,
            object_id,
            description: describe(action_type, content_type, object_id),
        })
    }
}

fn verb(action: ActionType) -> &'static str {
    match action {
        ActionType::Create => "created",
        ActionType::Update => "updated",
        ActionType::Delete => "deleted",
        ActionType::View => "viewed",
        ActionType::Import => "imported",
        ActionType::Export => "exported",
        ActionType::Login | ActionType::Logout | ActionType::Other => "operated on",
    }
}

fn noun(content: ContentType) -> &'static str {
    match content {
        ContentType::DeviceArrival => "device arrival record",
        ContentType::DeviceDelivery => "device delivery record",
        ContentType::DeviceSecurity => "device installation status",
        ContentType::User => "user info",
        ContentType::System => "system",
    }
}

pub fn describe(action: ActionType, content: ContentType, object_id: Option<i64>) -> String {
    match object_id {
        Some(id) => format!("{} {} ID:{id}", verb(action), noun(content)),
        None => format!("{} {}", verb(action), noun(content)),
    }
}
