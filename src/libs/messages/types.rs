#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),  // id
    TaskUpdated(String),  // id
    TaskDeleted(String),  // id
    TaskCompleted(String),
    TaskAlreadyCompleted(String),
    TaskUncompleted(String),
    TaskAlreadyPending(String),
    TaskArchived(String),
    TaskRestored(String),
    TaskCopied(String), // new id
    TaskSnoozed(String),
    DueDateChanged(String, String),  // old, new
    PriorityChanged(String, String), // old, new
    PriorityAlreadyHighest(String),
    AttachmentAdded(String, String), // attachment name, id
    NoChangesDetected,
    ConfirmDeleteTask(String), // title
    SelectPriority,
    DemoTasksCreated(usize),
    ConfirmReplaceWithDemo(usize), // existing task count

    // === LISTING MESSAGES ===
    PendingTasksHeader,
    CompletedTasksHeader,
    AllTasksHeader,
    TaggedTasksHeader(String, String), // scope, tag
    ArchivedPendingTasksHeader,
    ArchivedCompletedTasksHeader,
    AllArchivedTasksHeader,
    UpcomingTasksHeader,
    TaskDetailsHeader(String), // short id
    NoTasksFound,
    NoArchivedTasksFound,
    NoUpcomingTasks,

    // === STORE MESSAGES ===
    TaskNotFound(String),                 // id or prefix
    AmbiguousTaskId(String, Vec<String>), // prefix, candidates
    DuplicateTaskId(String),
    StoreCorrupted(String, String), // path, detail
    StoreLoaded(usize, String),     // count, path
    StoreSaved(usize, String),      // count, path

    // === VALIDATION MESSAGES ===
    EmptyTitle,
    InvalidTaskId(String),
    EmptyTag,
    EmptyAttachmentPath,
    InvalidPriority(String),
    InvalidDate(String),
    InvalidDuration(String),
    ZeroDuration,
    DurationOverflow(String),
    PriorityOrBumpRequired,
    InvalidChoice,

    // === STATE MESSAGES ===
    TaskAlreadyArchived(String),
    TaskNotArchived(String),

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(usize, String),        // count, path
    ImportCompleted(usize, usize, String), // imported, skipped, path
    ImportFailed(String, String),          // path, reason
    ImportMalformed(String),               // parser detail
    ImportInvalidTask(usize, String),      // index, reason
    ImportDuplicateId(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String),
    InvalidDateFormat(String),
    ConfigWizardHeader,
    PromptDataFile,
    PromptDateFormat,
    PromptIdDisplayLength,
    PromptDefaultPriority,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
