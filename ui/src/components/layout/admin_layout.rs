use super::Sidebar;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Html,
}

/// Shell around every signed-in page: a fixed sidebar from the `md`
/// breakpoint up, and below it a top bar whose menu button opens the same
/// sidebar as a drawer.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Dashboard);
    let drawer_open = use_state(|| false);

    // Any navigation closes the drawer.
    {
        let drawer_open = drawer_open.clone();
        use_effect_with(route.clone(), move |_| drawer_open.set(false));
    }

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(false))
    };

    html! {
        <div class="min-h-screen md:pl-64">
            <aside class="hidden md:block fixed inset-y-0 left-0 w-64">
                <Sidebar active_route={route.clone()} />
            </aside>

            <header class="md:hidden sticky top-0 z-30 flex items-center gap-3 px-4 h-14 \
                           bg-neutral-900 text-white">
                <button onclick={open_drawer} class="p-1" aria-label="Open menu">
                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
                <span class="font-semibold">{"CoWork Kerala"}</span>
            </header>

            if *drawer_open {
                <div class="md:hidden fixed inset-0 z-40">
                    <div class="absolute inset-0 bg-neutral-900/50" onclick={close_drawer} />
                    <aside class="relative w-64 h-full shadow-xl">
                        <Sidebar active_route={route} />
                    </aside>
                </div>
            }

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
