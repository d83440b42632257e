//! Login page component
//!
//! A standalone page wrapping the login form; the form itself persists the
//! session and navigates home on success.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col">
            // Header
            <header class="border-b border-slate-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold">"Q"</span>
                            </div>
                            <span class="text-xl font-bold text-slate-900">"QuizMaster"</span>
                        </A>

                        <A
                            href="/"
                            attr:class="text-sm font-medium text-slate-500 hover:text-slate-900 transition-colors"
                        >
                            "← Back to home"
                        </A>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-6 border border-slate-200">
                    <LoginForm/>
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-slate-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-slate-400">
                        "© 2025 QuizMaster. All rights reserved."
                    </p>
                </div>
            </footer>
        </div>
    }
}
