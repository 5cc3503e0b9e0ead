//! Resources step: collect the materials the student will actually use.

use sylvia_session::SessionStore;

use crate::step::{AttachmentView, RenderContext, Step, StepView};

pub struct ResourcesStep;

impl Step for ResourcesStep {
    fn id(&self) -> &'static str {
        "resources"
    }

    fn label(&self) -> &'static str {
        "Resources"
    }

    fn icon(&self) -> &'static str {
        "📚"
    }

    fn description(&self) -> &'static str {
        "Collect the key resources for this task."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let session = store.session();
        let mut body = String::from(
            "List the key resources you will actually use for this task.\n",
        );

        if !session.resources.is_empty() {
            body.push_str("\n##### Your resources\n");
            for resource in &session.resources {
                let mut line = format!("- **{}**", resource.name);
                if !resource.kind.is_empty() {
                    line.push_str(&format!("  ·  {}", resource.kind));
                }
                if let Some(ref link) = resource.link {
                    line.push_str(&format!("  ·  {}", link));
                }
                body.push_str(&line);
                body.push('\n');
            }
        }

        // Download affordances only for upload ids that still resolve;
        // a dangling reference skips the affordance, never the panel.
        let attachments = session
            .resources
            .iter()
            .filter_map(|resource| {
                let upload_id = resource.upload_id.as_deref()?;
                let file = store.download(upload_id)?;
                Some(AttachmentView {
                    resource_name: resource.name.clone(),
                    upload_id: upload_id.to_string(),
                    file_name: file.name.clone(),
                    mime: file.mime.clone(),
                })
            })
            .collect();

        let mut view = StepView::for_step(self, store, ctx).with_body(body);
        view.attachments = attachments;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvia_core::UploadedFile;
    use sylvia_session::SessionStore;

    #[test]
    fn renders_resources_in_insertion_order() {
        let mut store = SessionStore::new(Vec::new());
        store.add_resource("First", "Textbook / reading", None, None).unwrap();
        store
            .add_resource("Second", "", Some("https://example.com"), None)
            .unwrap();
        store.take_clear_inputs();

        let view = ResourcesStep.render(&store, &RenderContext::default());
        let first = view.body.find("**First**").unwrap();
        let second = view.body.find("**Second**").unwrap();
        assert!(first < second);
        assert!(view.body.contains("https://example.com"));
    }

    #[test]
    fn attachment_offered_only_when_upload_resolves() {
        let mut store = SessionStore::new(Vec::new());
        store
            .add_resource(
                "Slides",
                "",
                None,
                Some(UploadedFile::new("slides.pdf", "application/pdf", vec![1, 2])),
            )
            .unwrap();

        let view = ResourcesStep.render(&store, &RenderContext::default());
        assert_eq!(view.attachments.len(), 1);
        assert_eq!(view.attachments[0].file_name, "slides.pdf");

        // Simulate a restart: the session survives, the blobs do not.
        let state = store.persisted();
        let mut restored = SessionStore::new(Vec::new());
        restored.restore(state);

        let view = ResourcesStep.render(&restored, &RenderContext::default());
        assert!(view.attachments.is_empty());
        // The resource itself still renders
        assert!(view.body.contains("**Slides**"));
    }

    #[test]
    fn warning_and_clear_flag_pass_through() {
        let store = SessionStore::new(Vec::new());
        let ctx = RenderContext::default()
            .with_warning("Give the resource at least a short name.")
            .with_clear_inputs(true);
        let view = ResourcesStep.render(&store, &ctx);
        assert_eq!(
            view.warning.as_deref(),
            Some("Give the resource at least a short name.")
        );
        assert!(view.clear_inputs);
    }
}
