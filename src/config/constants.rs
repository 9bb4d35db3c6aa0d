//! Fixed identifiers shared with the extension host and the analysis CLI

/// Command that triggers a stack analysis report
pub const STACK_ANALYSIS_COMMAND: &str = "rhda.stackAnalysis";

/// Command that raises the Red Hat repository recommendation notification
pub const REDHAT_REPOSITORY_RECOMMENDATION_NOTIFICATION_COMMAND: &str =
    "rhda.redhatRepositoryRecommendationNotification";

/// Source tag attached to analysis requests
pub const UTM_SOURCE: &str = "vscode";

/// Secret store key holding the Snyk token
pub const SNYK_TOKEN_KEY: &str = "rhda-snyk-token";

/// Configuration section owning every extension setting
pub const CONFIG_SECTION: &str = "redHatDependencyAnalytics";

/// Prefix for every mirrored environment variable
pub const ENV_PREFIX: &str = "VSCEXT_";

/// File name of the generated HTML report
pub const REPORT_FILE_NAME: &str = "redhatDependencyAnalyticsReport.html";

pub const DEFAULT_MVN_EXECUTABLE: &str = "mvn";
pub const DEFAULT_NPM_EXECUTABLE: &str = "npm";
pub const DEFAULT_GO_EXECUTABLE: &str = "go";
pub const DEFAULT_PYTHON3_EXECUTABLE: &str = "python3";
pub const DEFAULT_PIP3_EXECUTABLE: &str = "pip3";
pub const DEFAULT_PYTHON_EXECUTABLE: &str = "python";
pub const DEFAULT_PIP_EXECUTABLE: &str = "pip";
