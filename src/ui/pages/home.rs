//! Home page component
//!
//! The application root and the post-login destination.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::NavBar;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    // Logging out from here navigates in-app to the login view.
    let on_logout = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-slate-50">
            <NavBar on_logout=Callback::new(on_logout)/>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="text-center max-w-2xl mx-auto">
                    <h1 class="text-4xl font-bold text-slate-900 mb-4">
                        "Test your knowledge"
                    </h1>
                    <p class="text-lg text-slate-500 mb-8">
                        "Sign in, take a quiz, and track how you did over time."
                    </p>
                    <A
                        href="/results"
                        attr:class="inline-block px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "View my results"
                    </A>
                </div>
            </main>
        </div>
    }
}
