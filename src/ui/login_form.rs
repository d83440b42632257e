//! Login form component
//!
//! Owns all of its state locally: field values, visibility toggle,
//! per-field validation errors, the top-level submit error, and the
//! submitting flag. On success it persists the session, broadcasts the
//! change, and navigates home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{self, AuthError, Credentials, User};

/// Email/password login form.
#[component]
pub fn LoginForm(
    /// Callback run with the authenticated user after a successful login,
    /// before navigating home
    #[prop(optional, into)]
    on_success: Option<Callback<User>>,
) -> impl IntoView {
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submit_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_error.set(None);

        // Normalize before validating so what we check is what we send.
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        }
        .normalized();

        let errors = session::check(&credentials);
        email_error.set(errors.email.clone());
        password_error.set(errors.password.clone());
        if !errors.is_clean() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = session::login(&credentials).await;
            submitting.set(false);

            match result {
                Ok(success) => {
                    session::establish(&success);
                    if let Some(callback) = on_success {
                        callback.run(success.user.clone());
                    }
                    // Replace history so Back does not return to the login
                    // screen.
                    navigate(
                        "/",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    if matches!(err, AuthError::Network) {
                        leptos::logging::error!("login request failed: {err}");
                    }
                    submit_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate=true>
            // Header
            <div class="text-center">
                <h2 class="text-2xl font-bold text-slate-900">"Login"</h2>
                <p class="mt-2 text-sm text-slate-500">
                    "Sign in to continue to QuizMaster"
                </p>
            </div>

            // Top-level error from a rejected or failed submit
            {move || {
                submit_error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            // Email field
            <div>
                <label for="email" class="block text-sm font-medium text-slate-700 mb-1">
                    "Email"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="w-full px-3 py-2 border border-slate-300 rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                           transition-colors"
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                />
                {move || {
                    email_error.get().map(|error| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{error}</p>
                        }
                    })
                }}
            </div>

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-slate-700 mb-1">
                    "Password"
                </label>
                <div class="relative">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        class="w-full px-3 py-2 pr-16 border border-slate-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                               transition-colors"
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                    />
                    // Flips the input between text/password; the value is
                    // never touched.
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center text-sm text-slate-400 hover:text-slate-600"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                {move || {
                    password_error.get().map(|error| {
                        view! {
                            <p class="mt-1 text-sm text-red-500">{error}</p>
                        }
                    })
                }}
            </div>

            // Submit button, disabled while the single attempt is in flight
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-indigo-600 hover:bg-indigo-700
                       text-white font-medium rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}
