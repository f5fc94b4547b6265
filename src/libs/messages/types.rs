#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === APP MESSAGES ===
    AppHeader,
    AppTagline,
    CreateTaskHeader,
    EditTaskHeader,

    // === TASK LIST MESSAGES ===
    LoadingTasks,
    NoTasksYet,
    TasksCount(usize),
    TaskNotFoundWithId(String),

    // === TASK MUTATION MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskCompleted,
    TaskMarkedPending,
    EditingTask(String),
    EditCancelled,

    // === VALIDATION MESSAGES ===
    TitleEmpty,

    // === API FAILURE MESSAGES ===
    ServerConnectionFailed,
    TaskSaveFailed,
    TaskDeleteFailed,
    TaskStatusUpdateFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigParseError,
    DataStoragePathError,

    // === PROMPTS ===
    PromptApiUrl,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectAction,
    PromptSelectTask,
    PromptConfirmSave,
    PromptConfirmDelete(String),

    // === SHELL ACTIONS ===
    ActionAdd,
    ActionEdit,
    ActionToggle,
    ActionDelete,
    ActionRefresh,
    ActionQuit,
}
