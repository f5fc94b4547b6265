#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::{json, Value};
    use taskpad::api::{ApiConfig, TasksClient};
    use taskpad::libs::controller::{Outcome, TaskController};
    use taskpad::libs::messages::{Level, Message};
    use taskpad::libs::notifier::{MemoryNotifier, Notification};
    use taskpad::libs::task::{Task, TaskId};
    use test_context::{test_context, AsyncTestContext};

    struct ControllerTestContext {
        server: ServerGuard,
    }

    impl AsyncTestContext for ControllerTestContext {
        async fn setup() -> Self {
            ControllerTestContext {
                server: Server::new_async().await,
            }
        }
    }

    impl ControllerTestContext {
        fn controller(&self) -> TaskController<TasksClient, MemoryNotifier> {
            let config = ApiConfig::new(&format!("{}/tasks/", self.server.url()));
            TaskController::new(TasksClient::new(&config), MemoryNotifier::new())
        }
    }

    fn task_json(id: i64, title: &str, description: &str, completed: bool) -> Value {
        json!({
            "id": id,
            "title": title,
            "description": description,
            "completed": completed,
            "created_at": "2024-05-01T10:00:00Z"
        })
    }

    fn notification(level: Level, message: Message) -> Notification {
        Notification::new(level, message)
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_refresh_replaces_collection(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([task_json(1, "A", "", false), task_json(2, "B", "second", true)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        assert_eq!(controller.refresh().await, Outcome::Applied);

        list.assert_async().await;
        assert_eq!(controller.tasks().len(), 2);
        assert_eq!(controller.tasks()[0].title, "A");
        assert_eq!(controller.tasks()[1].description, "second");
        assert!(!controller.is_loading());
        assert!(controller.notifier().notifications().is_empty());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_blank_title_sends_nothing(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", false)]).to_string())
            .expect(1)
            .create_async()
            .await;
        let create = ctx.server.mock("POST", "/tasks/").expect(0).create_async().await;

        let mut controller = ctx.controller();
        controller.refresh().await;
        let before = controller.tasks().to_vec();

        controller.set_title("   \t ");
        controller.set_description("ignored");
        assert_eq!(controller.submit().await, Outcome::Rejected);

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.tasks(), before.as_slice());
        assert_eq!(controller.title(), "   \t ");
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Warning, Message::TitleEmpty)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_create_clears_drafts_and_refreshes_once(ctx: &mut ControllerTestContext) {
        let create = ctx
            .server
            .mock("POST", "/tasks/")
            .match_body(Matcher::Json(json!({"title": "Buy milk", "description": "2 liters"})))
            .with_status(201)
            .with_body(task_json(5, "Buy milk", "2 liters", false).to_string())
            .expect(1)
            .create_async()
            .await;
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(5, "Buy milk", "2 liters", false)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.set_title("Buy milk");
        controller.set_description("2 liters");
        assert_eq!(controller.submit().await, Outcome::Applied);

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.title(), "");
        assert_eq!(controller.description(), "");
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Success, Message::TaskCreated)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_edit_submits_update_for_task(ctx: &mut ControllerTestContext) {
        let mut list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "Write report", "quarterly", true)]).to_string())
            .expect(1)
            .create_async()
            .await;
        let create = ctx.server.mock("POST", "/tasks/").expect(0).create_async().await;
        let update = ctx
            .server
            .mock("PUT", "/tasks/1/")
            .match_body(Matcher::Json(json!({"title": "Write annual report", "description": "quarterly", "completed": true})))
            .with_status(200)
            .with_body(task_json(1, "Write annual report", "quarterly", true).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.refresh().await;
        list.assert_async().await;
        list.remove_async().await;
        list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "Write annual report", "quarterly", true)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let task = controller.find(&TaskId::Number(1)).cloned().unwrap();
        controller.begin_edit(&task);
        assert_eq!(controller.title(), "Write report");
        assert_eq!(controller.description(), "quarterly");

        controller.set_title("Write annual report");
        assert_eq!(controller.submit().await, Outcome::Applied);

        update.assert_async().await;
        create.assert_async().await;
        list.assert_async().await;
        assert!(controller.editing().is_none());
        assert_eq!(controller.title(), "");
        assert_eq!(controller.tasks()[0].title, "Write annual report");
        assert_eq!(controller.notifier().last(), Some(&notification(Level::Success, Message::TaskUpdated)));
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_cancel_edit_makes_no_request(ctx: &mut ControllerTestContext) {
        let any = ctx.server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let mut controller = ctx.controller();
        let task: Task = serde_json::from_value(task_json(3, "Call mom", "sunday", false)).unwrap();
        controller.begin_edit(&task);
        assert_eq!(controller.editing(), Some(&task));

        controller.cancel_edit();

        any.assert_async().await;
        assert!(controller.editing().is_none());
        assert_eq!(controller.title(), "");
        assert_eq!(controller.description(), "");
        assert!(controller.notifier().notifications().is_empty());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_failed_submit_keeps_drafts_and_session(ctx: &mut ControllerTestContext) {
        let update = ctx.server.mock("PUT", "/tasks/3/").with_status(500).expect(1).create_async().await;
        let list = ctx.server.mock("GET", "/tasks/").expect(0).create_async().await;

        let mut controller = ctx.controller();
        let task: Task = serde_json::from_value(task_json(3, "Call mom", "sunday", false)).unwrap();
        controller.begin_edit(&task);
        controller.set_description("saturday");

        assert_eq!(controller.submit().await, Outcome::Failed);

        update.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.editing(), Some(&task));
        assert_eq!(controller.title(), "Call mom");
        assert_eq!(controller.description(), "saturday");
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Error, Message::TaskSaveFailed)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_failed_delete_leaves_collection(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", false), task_json(2, "B", "", true)]).to_string())
            .expect(1)
            .create_async()
            .await;
        let delete = ctx.server.mock("DELETE", "/tasks/1/").with_status(500).expect(1).create_async().await;

        let mut controller = ctx.controller();
        controller.refresh().await;
        let before = controller.tasks().to_vec();

        assert_eq!(controller.delete(&TaskId::Number(1)).await, Outcome::Failed);

        delete.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.tasks(), before.as_slice());
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Error, Message::TaskDeleteFailed)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_delete_refreshes(ctx: &mut ControllerTestContext) {
        let delete = ctx.server.mock("DELETE", "/tasks/2/").with_status(204).expect(1).create_async().await;
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", false)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        assert_eq!(controller.delete(&TaskId::Number(2)).await, Outcome::Applied);

        delete.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Info, Message::TaskDeleted)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_toggle_completes_task(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", false)]).to_string())
            .expect(1)
            .create_async()
            .await;
        let toggle = ctx
            .server
            .mock("PATCH", "/tasks/1/")
            .with_status(200)
            .with_body(task_json(1, "A", "", true).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.refresh().await;
        list.assert_async().await;
        list.remove_async().await;

        let refreshed = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", true)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let id = TaskId::Number(1);
        assert_eq!(controller.toggle_complete(&id, false).await, Outcome::Applied);

        toggle.assert_async().await;
        refreshed.assert_async().await;
        assert!(controller.find(&id).unwrap().completed);
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Success, Message::TaskCompleted)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_toggle_label_follows_previous_value(ctx: &mut ControllerTestContext) {
        // The server says the task is still completed; the label only looks at the argument.
        let _toggle = ctx
            .server
            .mock("PATCH", "/tasks/4/")
            .with_status(200)
            .with_body(task_json(4, "D", "", true).to_string())
            .create_async()
            .await;
        let _list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(4, "D", "", true)]).to_string())
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.toggle_complete(&TaskId::Number(4), true).await;

        assert_eq!(controller.notifier().notifications(), &[notification(Level::Info, Message::TaskMarkedPending)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_failed_toggle_only_notifies(ctx: &mut ControllerTestContext) {
        let toggle = ctx.server.mock("PATCH", "/tasks/1/").with_status(404).expect(1).create_async().await;
        let list = ctx.server.mock("GET", "/tasks/").expect(0).create_async().await;

        let mut controller = ctx.controller();
        assert_eq!(controller.toggle_complete(&TaskId::Number(1), false).await, Outcome::Failed);

        toggle.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Error, Message::TaskStatusUpdateFailed)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_collection(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(1, "A", "", false)]).to_string())
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.refresh().await;
        let before = controller.tasks().to_vec();
        list.remove_async().await;
        let _unavailable = ctx.server.mock("GET", "/tasks/").with_status(503).create_async().await;

        assert_eq!(controller.refresh().await, Outcome::Failed);

        assert_eq!(controller.tasks(), before.as_slice());
        assert!(!controller.is_loading());
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Error, Message::ServerConnectionFailed)]);
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_mutation_then_failed_refresh_reports_both(ctx: &mut ControllerTestContext) {
        let _create = ctx.server.mock("POST", "/tasks/").with_status(201).with_body(task_json(9, "New", "", false).to_string()).create_async().await;
        let _list = ctx.server.mock("GET", "/tasks/").with_status(500).create_async().await;

        let mut controller = ctx.controller();
        controller.set_title("New");
        assert_eq!(controller.submit().await, Outcome::Applied);

        assert_eq!(
            controller.notifier().notifications(),
            &[
                notification(Level::Success, Message::TaskCreated),
                notification(Level::Error, Message::ServerConnectionFailed)
            ]
        );
        assert!(controller.tasks().is_empty());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_typed_id_finds_text_id_from_server(ctx: &mut ControllerTestContext) {
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(
                json!([
                    {"id": "12", "title": "A", "description": "", "completed": false, "created_at": ""},
                    {"id": "007", "title": "B", "description": "", "completed": false, "created_at": ""}
                ])
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.refresh().await;

        list.assert_async().await;
        let typed: TaskId = "12".parse().unwrap();
        assert_eq!(controller.find(&typed).unwrap().title, "A");
        let padded: TaskId = "007".parse().unwrap();
        assert_eq!(controller.find(&padded).unwrap().title, "B");
        assert!(controller.find(&"7".parse().unwrap()).is_none());
    }

    #[test_context(ControllerTestContext)]
    #[tokio::test]
    async fn test_created_with_empty_body_is_applied_once(ctx: &mut ControllerTestContext) {
        let create = ctx.server.mock("POST", "/tasks/").with_status(201).with_body("").expect(1).create_async().await;
        let list = ctx
            .server
            .mock("GET", "/tasks/")
            .with_status(200)
            .with_body(json!([task_json(5, "Buy milk", "", false)]).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut controller = ctx.controller();
        controller.set_title("Buy milk");
        assert_eq!(controller.submit().await, Outcome::Applied);

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(controller.title(), "");
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.notifier().notifications(), &[notification(Level::Success, Message::TaskCreated)]);
    }
}
