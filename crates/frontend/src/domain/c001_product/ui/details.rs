use contracts::domain::c001_product::ProductDraft;
use contracts::shared::envelope::FieldError;
use leptos::prelude::*;

fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// Product create/edit form. The dialog around it owns submission; this
/// component only binds the draft fields and renders per-field rejections.
#[component]
pub fn ProductForm(
    draft: RwSignal<ProductDraft>,
    #[prop(into)] field_errors: Signal<Vec<FieldError>>,
) -> impl IntoView {
    let error_for = move |field: &'static str| {
        field_errors.with(|errors| field_message(errors, field))
    };

    view! {
        <form class="form" on:submit=move |ev| ev.prevent_default()>
            <div class="form-field">
                <label class="form-field__label">"Name"</label>
                <input
                    type="text"
                    class="form-field__input"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        draft.update(|d| d.name = val);
                    }
                />
                {move || error_for("name").map(|msg| view! {
                    <span class="form-field__error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label class="form-field__label">"Brand"</label>
                <input
                    type="text"
                    class="form-field__input"
                    prop:value=move || draft.with(|d| d.brand.clone())
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        draft.update(|d| d.brand = val);
                    }
                />
                {move || error_for("brand").map(|msg| view! {
                    <span class="form-field__error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label class="form-field__label">"Category"</label>
                <input
                    type="text"
                    class="form-field__input"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        draft.update(|d| d.category = val);
                    }
                />
                {move || error_for("category").map(|msg| view! {
                    <span class="form-field__error">{msg}</span>
                })}
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label class="form-field__label">"Unit"</label>
                    <input
                        type="text"
                        class="form-field__input"
                        prop:value=move || draft.with(|d| d.unit.clone())
                        on:input=move |ev| {
                            let val = event_target_value(&ev);
                            draft.update(|d| d.unit = val);
                        }
                    />
                    {move || error_for("unit").map(|msg| view! {
                        <span class="form-field__error">{msg}</span>
                    })}
                </div>

                <div class="form-field">
                    <label class="form-field__label">"Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="form-field__input"
                        prop:value=move || draft.with(|d| d.price.to_string())
                        on:input=move |ev| {
                            // Keep the last valid number while typing
                            if let Ok(price) = event_target_value(&ev).parse::<f64>() {
                                draft.update(|d| d.price = price);
                            }
                        }
                    />
                    {move || error_for("price").map(|msg| view! {
                        <span class="form-field__error">{msg}</span>
                    })}
                </div>
            </div>
        </form>
    }
}
