//! アクセス申請フォーム

use leptos::prelude::*;
use theme_gallery_common::AccessRequestForm;

use crate::components::toast::ToastNotifier;

#[component]
pub fn RequestAccessPage(notifier: ToastNotifier) -> impl IntoView {
    let form = RwSignal::new(AccessRequestForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut notifier = notifier;
        form.update(|f| {
            f.submit(&mut notifier);
        });
    };

    let name_error = move || form.with(|f| f.errors().name_message());
    let email_error = move || form.with(|f| f.errors().email_message());

    view! {
        <section class="section request-access">
            <div class="page-header">
                <h1>"Request Access"</h1>
                <p class="text-muted">"Tell us a little about yourself and we'll get back to you."</p>
            </div>

            <Show when=move || form.with(|f| f.is_submitted())>
                <p class="form-success">"Thanks! Your request has been sent."</p>
            </Show>

            <form class="access-form" on:submit=on_submit novalidate=true>
                <div class="form-group" class:has-error=move || name_error().is_some()>
                    <label for="name">"Name *"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                    {move || name_error().map(|m| view! { <p class="field-error">{m}</p> })}
                </div>

                <div class="form-group" class:has-error=move || email_error().is_some()>
                    <label for="email">"Email *"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    {move || email_error().map(|m| view! { <p class="field-error">{m}</p> })}
                </div>

                <div class="form-group">
                    <label for="company">"Company"</label>
                    <input
                        type="text"
                        id="company"
                        prop:value=move || form.with(|f| f.company.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.company = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        rows="4"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.message = value);
                        }
                    ></textarea>
                </div>

                <button type="submit" class="btn btn-primary">"Submit Request"</button>
            </form>
        </section>
    }
}
