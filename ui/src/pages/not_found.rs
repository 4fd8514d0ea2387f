use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="mt-2 text-neutral-600">{"Page not found"}</p>
            <Link<Route>
                to={Route::Dashboard}
                classes="mt-6 text-sm font-medium text-neutral-900 underline"
            >
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
