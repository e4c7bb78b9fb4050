//! Hello world: shows which job the add-on window was opened from.
//!
//! The job identifier is written into the page as-is, without HTML escaping. A
//! `jobUUID` carrying markup is reflected into the add-on window verbatim.

use addon_functions::page::{SDK_SCRIPT_URL, SDK_STYLESHEET_URL};
use addon_functions::{AddonEvent, EventResponse, InvocationContext, JobArgs};

/// Renders the greeting page for the job in `eventArgs.jobUUID`.
///
/// Events without a `jobUUID` never get here; extraction fails first.
pub fn handle(event: AddonEvent<JobArgs>, _context: &InvocationContext) -> EventResponse {
    let html = render(&event.event_args.job_uuid);
    log::info!("{html}");
    EventResponse::new(html)
}

/// The greeting page, with `job_uuid` substituted into the paragraph.
pub fn render(job_uuid: &str) -> String {
    format!(
        r#"<html>
        <head>
                <link rel="stylesheet" href="{SDK_STYLESHEET_URL}">
        <script src="{SDK_SCRIPT_URL}"></script>
                <script>
                        var client = SMClient.init();

                        //Resize Addon Window
                        client.resizeWindow(500, 200);

                </script>
        </head>
        <body>
                <h1>Hello World Lambda Event</h1>

                <p>You have opened job <b>{job_uuid}</b></p>

                <button onClick="client.closeWindow();">Close Window</button>
        </body>
        </html>"#
    )
}
