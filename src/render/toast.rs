use crate::page::Toast;

use super::escape;

/// Error notification with a dismiss button posting back to the server
pub fn toast(toast: &Toast) -> String {
    format!(
        r#"<div class="toast show" role="alert" data-toast-id="{id}">
    <div class="toast-header bg-danger text-white">
        <i class="fas fa-exclamation-triangle me-2"></i>
        <strong class="me-auto">Error</strong>
        <form method="post" action="/toasts/{id}/dismiss" class="d-inline">
            <button type="submit" class="btn-close btn-close-white" aria-label="Close"></button>
        </form>
    </div>
    <div class="toast-body">
        {message}
    </div>
</div>"#,
        id = toast.id,
        message = escape(&toast.message),
    )
}

/// Fixed top-right container holding every live toast
pub fn toast_stack(toasts: &[Toast]) -> String {
    if toasts.is_empty() {
        return String::new();
    }

    let items = toasts.iter().map(toast).collect::<Vec<_>>().join("\n");
    format!(
        r#"<div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 1055;">
{items}
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_markup() {
        let t = Toast::new("Failed to load books. Please try again.");
        let html = toast(&t);
        assert!(html.contains("Failed to load books. Please try again."));
        assert!(html.contains(&format!("/toasts/{}/dismiss", t.id)));
        assert!(html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_empty_stack_renders_nothing() {
        assert_eq!(toast_stack(&[]), "");
    }

    #[test]
    fn test_stack_contains_every_toast() {
        let toasts = vec![Toast::new("one"), Toast::new("two")];
        let html = toast_stack(&toasts);
        assert_eq!(html.matches(r#"class="toast show""#).count(), 2);
    }
}
