//! Navigation bar component
//!
//! Mirrors the persisted session: reads token presence after hydration and
//! follows `authChanged` broadcasts for as long as it is mounted. The
//! logged-in/logged-out affordance is driven by token presence alone.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::{self, Subscription};

/// Top navigation bar with login/logout affordances and a collapsible
/// mobile menu.
#[component]
pub fn NavBar(
    /// Callback run after logout; pages wire in-app navigation to the
    /// login view here. Without it the component falls back to a hard
    /// redirect.
    #[prop(optional, into)]
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    let logged_in = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    // Read storage and subscribe after hydration; reading during render
    // would disagree with the server-rendered logged-out markup. The
    // subscription is held by the effect and dropped on unmount.
    let subscription = StoredValue::new_local(None::<Subscription>);
    Effect::new(move |_| {
        logged_in.set(session::is_logged_in());
        let listener = session::listen(move |user| logged_in.set(user.is_some()));
        subscription.set_value(Some(listener));
    });
    on_cleanup(move || subscription.set_value(None));

    let handle_logout = move |_: leptos::ev::MouseEvent| {
        session::logout();
        menu_open.set(false);
        match on_logout {
            Some(callback) => callback.run(()),
            None => hard_redirect("/login"),
        }
    };

    view! {
        <nav class="bg-white border-b border-slate-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold">"Q"</span>
                        </div>
                        <span class="text-xl font-bold text-slate-900">"QuizMaster"</span>
                    </A>

                    // Title
                    <div class="hidden sm:block">
                        <h1 class="text-sm font-medium text-slate-500">"Quiz Application"</h1>
                    </div>

                    // Desktop actions
                    <div class="hidden md:flex items-center gap-2">
                        <A
                            href="/results"
                            attr:class="px-3 py-1.5 text-sm font-medium text-slate-600 hover:text-slate-900 transition-colors"
                        >
                            "My Results"
                        </A>
                        {move || {
                            if logged_in.get() {
                                view! {
                                    <button
                                        class="px-3 py-1.5 text-sm font-medium text-white bg-indigo-600
                                               hover:bg-indigo-700 rounded-lg transition-colors"
                                        on:click=handle_logout
                                    >
                                        "Logout"
                                    </button>
                                }.into_any()
                            } else {
                                view! {
                                    <A
                                        href="/login"
                                        attr:class="px-3 py-1.5 text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors"
                                    >
                                        "Login"
                                    </A>
                                }.into_any()
                            }
                        }}
                    </div>

                    // Mobile menu toggle, independent of session state
                    <div class="md:hidden relative">
                        <button
                            class="p-2 rounded-lg hover:bg-slate-100 text-slate-600"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>

                        {move || {
                            menu_open.get().then(|| {
                                view! {
                                    <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-slate-200 py-1 z-50">
                                        <ul>
                                            // Any navigation from the menu closes it.
                                            <li on:click=move |_| menu_open.set(false)>
                                                <A
                                                    href="/results"
                                                    attr:class="block px-4 py-2 text-sm text-slate-700 hover:bg-slate-50 transition-colors"
                                                >
                                                    "My Results"
                                                </A>
                                            </li>
                                            {move || {
                                                if logged_in.get() {
                                                    view! {
                                                        <li>
                                                            <button
                                                                type="button"
                                                                class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-50 transition-colors"
                                                                on:click=handle_logout
                                                            >
                                                                "Logout"
                                                            </button>
                                                        </li>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <li on:click=move |_| menu_open.set(false)>
                                                            <A
                                                                href="/login"
                                                                attr:class="block px-4 py-2 text-sm text-slate-700 hover:bg-slate-50 transition-colors"
                                                            >
                                                                "Login"
                                                            </A>
                                                        </li>
                                                    }.into_any()
                                                }
                                            }}
                                        </ul>
                                    </div>
                                }
                            })
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Full-page redirect, used when no in-app navigation is wired up.
fn hard_redirect(path: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = path;
    }
}
