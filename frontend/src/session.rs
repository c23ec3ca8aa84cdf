use std::rc::Rc;

use opslearn_shared::{
    session::{Session, SessionStore},
    ImpersonationGrant,
};
use web_sys::window;
use yew::prelude::*;

/// [`SessionStore`] over the browser's `localStorage`. Storage failures
/// (private mode, quota) are ignored; the in-memory session still updates.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub enum SessionAction {
    Login(String),
    Impersonate {
        grant: ImpersonationGrant,
        author_slug: String,
    },
    StopImpersonating,
    Logout,
    DismissBan(u64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
}

impl SessionState {
    fn load() -> Self {
        Self {
            session: Session::load(&LocalStore),
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        let store = LocalStore;
        match action {
            SessionAction::Login(token) => session.login(&store, &token),
            SessionAction::Impersonate {
                grant,
                author_slug,
            } => session.begin_impersonation(&store, &grant, &author_slug),
            SessionAction::StopImpersonating => {
                session.stop_impersonating(&store);
            },
            SessionAction::Logout => session.logout(&store),
            SessionAction::DismissBan(id) => session.dismiss_ban(&store, id),
        }
        Rc::new(Self {
            session,
        })
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Loads the persisted session once at startup and shares it with every
/// page.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::load);

    html! {
        <ContextProvider<SessionContext> context={session}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// The shared session, or a locally loaded one outside the provider.
#[hook]
pub fn use_session() -> SessionContext {
    let fallback = use_reducer(SessionState::load);
    use_context::<SessionContext>().unwrap_or(fallback)
}
