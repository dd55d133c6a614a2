//! Actor identity resolution between xAPI agents and Caliper actors.
//!
//! # Responsibility
//! - Pick exactly one xAPI identifier scheme per agent.
//! - Flatten the chosen identity into a Caliper actor and rebuild it.
//!
//! # Invariants
//! - Scheme priority is OpenID, then mailbox, then account.
//! - Blank identifier values count as absent.
//! - `resolve_to_xapi` is not a strict inverse of `resolve_from_xapi`:
//!   actors without a recognized scheme come back as accounts.

use crate::convert::non_blank;
use crate::model::event::{Actor, Extensions, CALIPER_CONTEXT};
use crate::model::statement::{XApiAccount, XApiActor};

/// Actor extension key carrying the account home page.
pub const HOMEPAGE_EXTENSION: &str = "HOMEPAGE";

/// Actor `@type` marker for OpenID identities.
pub const SCHEME_OPENID: &str = "http://openid.net/";
/// Actor `@type` marker for mailbox identities.
pub const SCHEME_MBOX: &str = "foaf:mbox";
/// Actor `@type` marker for account identities.
pub const SCHEME_ACCOUNT: &str =
    "https://github.com/adlnet/xAPI-Spec/blob/master/xAPI.md#agentaccount";

/// xAPI identifier scheme recorded on a Caliper actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityScheme {
    OpenId,
    Mbox,
    Account,
}

impl IdentityScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenId => SCHEME_OPENID,
            Self::Mbox => SCHEME_MBOX,
            Self::Account => SCHEME_ACCOUNT,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            SCHEME_OPENID => Some(Self::OpenId),
            SCHEME_MBOX => Some(Self::Mbox),
            SCHEME_ACCOUNT => Some(Self::Account),
            _ => None,
        }
    }
}

/// The single identity selected from an xAPI agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorIdentity {
    OpenId(String),
    Mbox(String),
    /// Account object was present; either part may still be blank.
    Account {
        name: Option<String>,
        home_page: Option<String>,
    },
}

impl ActorIdentity {
    /// Selects the identity by scheme priority. Returns `None` when the agent
    /// carries no identifier at all.
    pub fn select(actor: &XApiActor) -> Option<Self> {
        if let Some(openid) = non_blank(actor.openid.as_deref()) {
            return Some(Self::OpenId(openid.to_string()));
        }
        if let Some(mbox) = non_blank(actor.mbox.as_deref()) {
            return Some(Self::Mbox(mbox.to_string()));
        }
        actor.account.as_ref().map(|account| Self::Account {
            name: non_blank(account.name.as_deref()).map(str::to_string),
            home_page: non_blank(account.home_page.as_deref()).map(str::to_string),
        })
    }

    pub fn scheme(&self) -> IdentityScheme {
        match self {
            Self::OpenId(_) => IdentityScheme::OpenId,
            Self::Mbox(_) => IdentityScheme::Mbox,
            Self::Account { .. } => IdentityScheme::Account,
        }
    }
}

/// Flattens an xAPI agent into a Caliper actor.
///
/// For accounts with both parts, the name becomes the identifier and the home
/// page is kept under [`HOMEPAGE_EXTENSION`]. A home page alone becomes the
/// identifier.
pub fn resolve_from_xapi(actor: &XApiActor) -> Actor {
    let mut extensions = Extensions::new();
    let identity = ActorIdentity::select(actor);
    let scheme = identity.as_ref().map(ActorIdentity::scheme);

    let id = match identity {
        Some(ActorIdentity::OpenId(value)) | Some(ActorIdentity::Mbox(value)) => Some(value),
        Some(ActorIdentity::Account { name, home_page }) => match (name, home_page) {
            (Some(name), Some(home_page)) => {
                extensions.insert(HOMEPAGE_EXTENSION.to_string(), home_page);
                Some(name)
            }
            (None, Some(home_page)) => Some(home_page),
            (name, None) => name,
        },
        None => None,
    };

    Actor {
        id,
        context: CALIPER_CONTEXT.to_string(),
        kind: scheme.map(|scheme| scheme.as_str().to_string()),
        name: actor.name.clone(),
        description: None,
        extensions,
    }
}

/// Rebuilds an xAPI agent from a Caliper actor.
///
/// Any scheme other than OpenID or mailbox, including none, produces an
/// account whose name is the stored identifier.
pub fn resolve_to_xapi(actor: &Actor) -> XApiActor {
    let mut xapi_actor = XApiActor {
        name: actor.name.clone(),
        ..XApiActor::default()
    };

    match actor.kind.as_deref().and_then(IdentityScheme::parse) {
        Some(IdentityScheme::OpenId) => xapi_actor.openid = actor.id.clone(),
        Some(IdentityScheme::Mbox) => xapi_actor.mbox = actor.id.clone(),
        Some(IdentityScheme::Account) | None => {
            let home_page = non_blank(
                actor
                    .extensions
                    .get(HOMEPAGE_EXTENSION)
                    .map(String::as_str),
            )
            .map(str::to_string);
            xapi_actor.account = Some(XApiAccount {
                name: actor.id.clone(),
                home_page,
            });
        }
    }

    xapi_actor
}
