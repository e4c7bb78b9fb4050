//! App action: the hello world greeting, opened from an app action button.
//!
//! The window keeps whatever size the platform gives it and closes back to the app.
//! As with [crate::hello_world], the job identifier is not escaped.

use addon_functions::page::{SDK_SCRIPT_URL, SDK_STYLESHEET_URL};
use addon_functions::{AddonEvent, EventResponse, InvocationContext, JobArgs};

pub fn handle(event: AddonEvent<JobArgs>, context: &InvocationContext) -> EventResponse {
    log::debug!("Received event for {}: {event:?}", context.request_id());
    EventResponse::new(render(&event.event_args.job_uuid))
}

/// The app action page, with `job_uuid` substituted into the paragraph.
///
/// Indentation mixes tabs and spaces, and some blank lines carry trailing tabs.
pub fn render(job_uuid: &str) -> String {
    format!(
        concat!(
            "\n",
            "<html>\n",
            "\t<head>\n",
            "\t\t<link rel=\"stylesheet\" href=\"{stylesheet}\">\n",
            "    \t<script src=\"{script}\"></script>\n",
            "\t\t<script>\n",
            "\t\t\tvar client = SMClient.init();\n",
            "\t\t\t\n",
            "\t\t</script>\n",
            "    </head>\n",
            "    <body>\n",
            "\t\t<h1>Hello World Simple Function Event</h1>\n",
            "\t\t\n",
            "\t\t<p>You have opened job <b>{job_uuid}</b></p>\n",
            "\t\t\n",
            "\t\t<button onClick=\"client.closeWindow();\">Return to App</button>\n",
            "\t\t\t\n",
            "\t</body>\n",
            "</html>",
        ),
        stylesheet = SDK_STYLESHEET_URL,
        script = SDK_SCRIPT_URL,
        job_uuid = job_uuid,
    )
}
