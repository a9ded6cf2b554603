//! Verification email content

use serde::{Deserialize, Serialize};

/// Subject and bodies of a verification email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub plain_text: String,
    pub html: String,
}

/// Build the link a recipient can follow instead of typing the code
///
/// The email is percent-escaped; the code is digits only.
pub fn verification_link(verify_url: &str, email: &str, code: &str) -> String {
    let separator = if verify_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}email={}&code={}",
        verify_url,
        separator,
        urlencoding::encode(email),
        code
    )
}

/// Render the verification email for one recipient
pub fn render_verification_email(
    brand_name: &str,
    verify_url: &str,
    email: &str,
    code: &str,
    year: i32,
) -> EmailContent {
    let link = verification_link(verify_url, email, code);
    let html_link = link.replace('&', "&amp;");

    let subject = format!("Your code is {}", code);

    let plain_text = format!(
        "Verify your email address\n\
         \n\
         Hello,\n\
         \n\
         Thank you for registering with us! To complete your registration, \
         please verify your email address by entering the following code:\n\
         \n\
         {code}\n\
         \n\
         Alternatively, you can open the link below to verify your email address:\n\
         {link}\n\
         \n\
         If you did not request this verification, please ignore this email.\n\
         \n\
         Best regards,\n\
         The {brand} Team\n\
         \n\
         All rights reserved. {brand} Inc. {year}\n",
        code = code,
        link = link,
        brand = brand_name,
        year = year,
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Verify Your Email</title>
  </head>
  <body style="margin: 0; padding: 0; background-color: #FDEDFE; font-family: 'Inter', sans-serif;">
    <table align="center" border="0" cellpadding="0" cellspacing="0" width="100%" style="max-width: 600px; background-color: #FFFFFF; margin: 20px auto; border-radius: 10px;">
      <tr>
        <td style="padding: 30px; background-color: #FCD3FE; color: #3D004D; font-size: 24px; font-weight: bold;">
          Verify your email address
        </td>
      </tr>
      <tr>
        <td style="padding: 30px; color: #333333; font-size: 16px;">
          <p style="margin-top: 0;">Hello,</p>
          <p>Thank you for registering with us! To complete your registration, please verify your email address by entering the following code:</p>
          <p style="font-size: 24px; font-weight: bold; color: #F26CF9; text-align: center; background-color: #FCE2FE; padding: 15px; border-radius: 8px;">
            {code}
          </p>
          <p style="text-align: center; margin: 30px 0;">
            <a href="{link}" style="background-color: #D3DAF9; color: #3D004D; padding: 12px 25px; border-radius: 5px; text-decoration: none; font-weight: bold;">
              Verify Email Address
            </a>
          </p>
          <p>If you did not request this verification, please ignore this email.</p>
          <p style="margin-bottom: 0;">Best regards,<br>The {brand} Team</p>
        </td>
      </tr>
      <tr>
        <td style="padding: 20px; background-color: #ABB4DD; text-align: center; color: #3D004D; font-size: 12px;">
          All rights reserved. {brand} Inc. {year}
        </td>
      </tr>
    </table>
  </body>
</html>
"#,
        code = code,
        link = html_link,
        brand = brand_name,
        year = year,
    );

    EmailContent {
        subject,
        plain_text,
        html,
    }
}
