//! Auto-submitting handoff page.
//!
//! Renders a gateway submission as a hidden-input form that posts itself
//! once on load. The submit button is disabled as soon as the form is sent
//! so a second click cannot start a second payment.

use crate::domain::donation::GatewaySubmission;
use crate::domain::foundation::html_escape;

const FORM_ID: &str = "payfast-form";
const BUTTON_ID: &str = "payfast-submit";

/// Renders the full HTML document for a gateway submission.
pub fn render_submission_page(submission: &GatewaySubmission) -> String {
    let mut inputs = String::new();
    for (name, value) in submission.fields.iter() {
        inputs.push_str(&format!(
            "      <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            html_escape(name),
            html_escape(value)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Redirecting to PayFast</title>
  </head>
  <body>
    <p>Redirecting you to PayFast to complete your donation&hellip;</p>
    <form id="{form_id}" action="{action}" method="{method}">
{inputs}      <button type="submit" id="{button_id}">Continue to PayFast</button>
    </form>
    <script>
      (function () {{
        var form = document.getElementById("{form_id}");
        var button = document.getElementById("{button_id}");
        var sent = false;
        function send(event) {{
          if (sent) {{
            if (event) event.preventDefault();
            return;
          }}
          sent = true;
          button.disabled = true;
          if (!event) form.submit();
        }}
        form.addEventListener("submit", send);
        send();
      }})();
    </script>
  </body>
</html>
"#,
        form_id = FORM_ID,
        button_id = BUTTON_ID,
        action = html_escape(&submission.action),
        method = html_escape(&submission.method.to_ascii_lowercase()),
        inputs = inputs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donation::GatewayFields;

    fn submission(fields: GatewayFields) -> GatewaySubmission {
        GatewaySubmission {
            action: "https://sandbox.payfast.co.za/eng/process".to_string(),
            method: "POST",
            fields,
        }
    }

    #[test]
    fn renders_one_hidden_input_per_field_in_order() {
        let mut fields = GatewayFields::new();
        fields.push("merchant_id", "10000100");
        fields.push("amount", "50.00");

        let html = render_submission_page(&submission(fields));

        let merchant = html
            .find(r#"<input type="hidden" name="merchant_id" value="10000100">"#)
            .unwrap();
        let amount = html
            .find(r#"<input type="hidden" name="amount" value="50.00">"#)
            .unwrap();
        assert!(merchant < amount);
        assert!(html.contains(r#"action="https://sandbox.payfast.co.za/eng/process""#));
        assert!(html.contains(r#"method="post""#));
    }

    #[test]
    fn escapes_field_values() {
        let mut fields = GatewayFields::new();
        fields.push("name_first", r#""><script>alert('x')</script>"#);

        let html = render_submission_page(&submission(fields));

        assert!(html.contains(
            r#"value="&quot;&gt;&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;""#
        ));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn includes_one_shot_submit_script() {
        let html = render_submission_page(&submission(GatewayFields::new()));
        assert!(html.contains("button.disabled = true"));
        assert!(html.contains("form.submit()"));
    }
}
