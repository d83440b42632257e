//! Results page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::NavBar;

/// Results page component
#[component]
pub fn ResultsPage() -> impl IntoView {
    let on_logout = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen bg-slate-50">
            <NavBar on_logout=Callback::new(on_logout)/>

            <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <h1 class="text-2xl font-bold text-slate-900 mb-6">"My Results"</h1>
                <div class="bg-white rounded-xl border border-slate-200 shadow-sm p-8 text-center">
                    <p class="text-slate-500">
                        "No quiz results yet. Completed quizzes will show up here."
                    </p>
                </div>
            </main>
        </div>
    }
}
