use crate::Route;
use crate::hooks::{use_logout, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        icon: "▦",
        route: Route::Dashboard,
    },
    NavItem {
        label: "Coworking Spaces",
        icon: "▣",
        route: Route::Spaces,
    },
    NavItem {
        label: "Leads",
        icon: "✉",
        route: Route::Leads,
    },
    NavItem {
        label: "Locations",
        icon: "⌖",
        route: Route::Locations,
    },
    NavItem {
        label: "Settings",
        icon: "⚙",
        route: Route::Settings,
    },
];

/// Nav entry to highlight for `route`. The space editor has no entry of
/// its own and counts as "Coworking Spaces".
fn section_of(route: &Route) -> Route {
    match route {
        Route::NewSpace | Route::EditSpace { .. } => Route::Spaces,
        other => other.clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_route: Route,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let on_logout = use_logout();
    let session = use_session();
    let section = section_of(&props.active_route);

    let link_classes = |active: bool| {
        classes!(
            "flex",
            "items-center",
            "gap-3",
            "mx-2",
            "px-4",
            "py-2",
            "rounded-md",
            "text-sm",
            if active {
                "bg-neutral-800 text-white font-medium"
            } else {
                "text-neutral-300 hover:bg-neutral-800 hover:text-white"
            }
        )
    };

    html! {
        <div class="h-full flex flex-col bg-neutral-900 text-neutral-100">
            <div class="px-6 py-5 border-b border-neutral-800">
                <p class="text-lg font-bold">{"CoWork Kerala"}</p>
                <p class="text-xs text-neutral-400">{"Admin Panel"}</p>
            </div>

            <nav class="flex-1 py-4 space-y-1">
                {for NAV_ITEMS.iter().map(|item| html! {
                    <Link<Route>
                        to={item.route.clone()}
                        classes={link_classes(item.route == section)}
                    >
                        <span class="w-4 text-center">{item.icon}</span>
                        <span>{item.label}</span>
                    </Link<Route>>
                })}
            </nav>

            <div class="p-4 border-t border-neutral-800">
                if let Some(session) = session {
                    <p class="text-sm font-medium truncate">{&session.name}</p>
                    <p class="mb-3 text-xs text-neutral-400 truncate">
                        {format!("{} · {}", session.role.label(), session.email)}
                    </p>
                }
                <button
                    onclick={on_logout}
                    class="w-full px-3 py-2 rounded-md text-left text-sm \
                           text-neutral-300 hover:bg-neutral-800 hover:text-white"
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::SpaceId;

    #[test]
    fn editor_routes_highlight_spaces() {
        assert_eq!(section_of(&Route::NewSpace), Route::Spaces);
        assert_eq!(
            section_of(&Route::EditSpace {
                id: SpaceId::from("space-1")
            }),
            Route::Spaces
        );
        assert_eq!(section_of(&Route::Leads), Route::Leads);
    }
}
