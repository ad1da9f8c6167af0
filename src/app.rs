use dioxus::prelude::*;

use crate::pages::{Landing, NotFound, Reader};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the "시작하기" button
/// - `/main` - Quote reader
/// - anything else - replaced with the landing page
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/main")]
    Reader {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles and routing. The quote store arrives as launch
/// context, see [`crate::context::use_quote_store`].
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_render_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Reader {}.to_string(), "/main");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/somewhere/else".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["somewhere".to_string(), "else".to_string()]
            }
        );
    }

    #[test]
    fn test_known_paths_parse() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Landing {});
        assert_eq!("/main".parse::<Route>().unwrap(), Route::Reader {});
    }
}
