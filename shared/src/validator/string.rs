//! String format validators

use std::sync::Arc;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::types::Diagnostics;
use crate::validator::{invalid_value, should_skip, ValidateRequest, Validator};

// Validators receive the raw Dynamic; anything that is a present string
// flows through `with_string`, everything else (other than null/unknown)
// is reported as the wrong type.
fn with_string(
    request: &ValidateRequest,
    diagnostics: &mut Diagnostics,
    check: impl FnOnce(&str, &mut Diagnostics),
) {
    if should_skip(&request.value) {
        return;
    }
    match request.value.as_str() {
        Some(value) => check(value, diagnostics),
        None => diagnostics.add_attribute_error(
            request.path.clone(),
            "Invalid Attribute Value",
            format!(
                "expected {} to be a string, got {}",
                request.path,
                request.value.type_name()
            ),
        ),
    }
}

struct LowercaseValidator;

impl Validator for LowercaseValidator {
    fn description(&self) -> String {
        "value must be lowercase".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if value != value.to_lowercase() {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn lowercase() -> Arc<dyn Validator> {
    Arc::new(LowercaseValidator)
}

struct NotEmptyValidator;

impl Validator for NotEmptyValidator {
    fn description(&self) -> String {
        "value must not be an empty string".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if value.is_empty() {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn string_not_empty() -> Arc<dyn Validator> {
    Arc::new(NotEmptyValidator)
}

struct LengthAtLeastValidator {
    min: usize,
}

impl Validator for LengthAtLeastValidator {
    fn description(&self) -> String {
        format!("value must be at least {} characters", self.min)
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if value.chars().count() < self.min {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn length_at_least(min: usize) -> Arc<dyn Validator> {
    Arc::new(LengthAtLeastValidator { min })
}

static COMMA_SEPARATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+(,.+)*$").expect("comma separated pattern is valid"));

struct CommaSeparatedListValidator;

impl Validator for CommaSeparatedListValidator {
    fn description(&self) -> String {
        "must be comma separated string".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if !COMMA_SEPARATED_RE.is_match(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn comma_separated_list() -> Arc<dyn Validator> {
    Arc::new(CommaSeparatedListValidator)
}

const REPO_KEY_FORBIDDEN: &str = " !@#$%^&*()+={}[]:;<>,/?~`|\\";

struct RepoKeyValidator;

impl Validator for RepoKeyValidator {
    fn description(&self) -> String {
        "value must be a valid repository key".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if value.is_empty() || value.len() > 64 {
                invalid_value(
                    diagnostics,
                    &request.path,
                    "must be 1 - 64 alphanumeric and hyphen characters",
                    value,
                );
            }
            if value.contains(|c| REPO_KEY_FORBIDDEN.contains(c)) {
                invalid_value(
                    diagnostics,
                    &request.path,
                    "cannot contain spaces or special characters: !@#$%^&*()+={}[]:;<>,/?~`|\\",
                    value,
                );
            }
        });
    }
}

pub fn repo_key() -> Arc<dyn Validator> {
    Arc::new(RepoKeyValidator)
}

static PROJECT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9\-]{1,31}$").expect("project key pattern is valid"));

struct ProjectKeyValidator;

impl Validator for ProjectKeyValidator {
    fn description(&self) -> String {
        "must be 2 - 32 lowercase alphanumeric and hyphen characters".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if !PROJECT_KEY_RE.is_match(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn project_key() -> Arc<dyn Validator> {
    Arc::new(ProjectKeyValidator)
}

struct StringInSliceValidator {
    ignore_case: bool,
    valid: Vec<String>,
}

impl Validator for StringInSliceValidator {
    fn description(&self) -> String {
        format!("value must be one of {:?}", self.valid)
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            let found = self.valid.iter().any(|candidate| {
                candidate == value || (self.ignore_case && candidate.eq_ignore_ascii_case(value))
            });
            if !found {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn string_in_slice(ignore_case: bool, valid: &[&str]) -> Arc<dyn Validator> {
    Arc::new(StringInSliceValidator {
        ignore_case,
        valid: valid.iter().map(|v| v.to_string()).collect(),
    })
}

struct RegexNotMatchesValidator {
    pattern: Regex,
    message: String,
}

impl Validator for RegexNotMatchesValidator {
    fn description(&self) -> String {
        if self.message.is_empty() {
            format!("value must not match regular expression '{}'", self.pattern)
        } else {
            self.message.clone()
        }
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if self.pattern.is_match(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

/// Rejects values matching the pattern. An empty `message` falls back to a
/// generated description.
pub fn regex_not_matches(pattern: Regex, message: &str) -> Arc<dyn Validator> {
    Arc::new(RegexNotMatchesValidator {
        pattern,
        message: message.to_string(),
    })
}

const MAX_EMAIL_LENGTH: usize = 254;

// Practical RFC 5322 shape check: one '@', non-empty local part, dotted
// domain, no whitespace.
fn valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    true
}

struct EmailValidator;

impl Validator for EmailValidator {
    fn description(&self) -> String {
        "value must be a valid email address".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if !valid_email(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn is_email() -> Arc<dyn Validator> {
    Arc::new(EmailValidator)
}

fn valid_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            parsed.host_str().is_some_and(|h| !h.is_empty())
                && matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

struct UrlHttpOrHttpsValidator;

impl Validator for UrlHttpOrHttpsValidator {
    fn description(&self) -> String {
        "value must be a valid URL with host and http or https scheme".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if !valid_http_url(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn is_url_http_or_https() -> Arc<dyn Validator> {
    Arc::new(UrlHttpOrHttpsValidator)
}

struct NotUrlValidator;

impl Validator for NotUrlValidator {
    fn description(&self) -> String {
        "value must not be a URL".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if valid_http_url(value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn is_not_url() -> Arc<dyn Validator> {
    Arc::new(NotUrlValidator)
}

// -- Cron expressions -------------------------------------------------------

struct CronFieldSpec {
    name: &'static str,
    min: u32,
    max: u32,
    names: &'static [&'static str],
    name_base: u32,
    allow_question: bool,
    allow_last: bool,
    allow_weekday: bool,
    allow_nth: bool,
}

const MONTH_NAMES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const DAY_NAMES: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const fn plain_field(name: &'static str, min: u32, max: u32) -> CronFieldSpec {
    CronFieldSpec {
        name,
        min,
        max,
        names: &[],
        name_base: 0,
        allow_question: false,
        allow_last: false,
        allow_weekday: false,
        allow_nth: false,
    }
}

// Quartz-style field order: seconds minutes hours day-of-month month
// day-of-week [year]
static QUARTZ_FIELDS: [CronFieldSpec; 7] = [
    plain_field("seconds", 0, 59),
    plain_field("minutes", 0, 59),
    plain_field("hours", 0, 23),
    CronFieldSpec {
        name: "day-of-month",
        min: 1,
        max: 31,
        names: &[],
        name_base: 0,
        allow_question: true,
        allow_last: true,
        allow_weekday: true,
        allow_nth: false,
    },
    CronFieldSpec {
        name: "month",
        min: 1,
        max: 12,
        names: MONTH_NAMES,
        name_base: 1,
        allow_question: false,
        allow_last: false,
        allow_weekday: false,
        allow_nth: false,
    },
    CronFieldSpec {
        name: "day-of-week",
        min: 1,
        max: 7,
        names: DAY_NAMES,
        name_base: 1,
        allow_question: true,
        allow_last: true,
        allow_weekday: false,
        allow_nth: true,
    },
    plain_field("year", 1970, 2199),
];

// Standard 5-field order: minute hour day-of-month month day-of-week
static STANDARD_TAIL_FIELDS: [CronFieldSpec; 3] = [
    CronFieldSpec {
        name: "day-of-month",
        min: 1,
        max: 31,
        names: &[],
        name_base: 0,
        allow_question: true,
        allow_last: false,
        allow_weekday: false,
        allow_nth: false,
    },
    CronFieldSpec {
        name: "month",
        min: 1,
        max: 12,
        names: MONTH_NAMES,
        name_base: 1,
        allow_question: false,
        allow_last: false,
        allow_weekday: false,
        allow_nth: false,
    },
    CronFieldSpec {
        name: "day-of-week",
        min: 0,
        max: 6,
        names: DAY_NAMES,
        name_base: 0,
        allow_question: true,
        allow_last: false,
        allow_weekday: false,
        allow_nth: false,
    },
];

fn parse_cron_value(value: &str, spec: &CronFieldSpec) -> Result<u32, String> {
    if let Ok(n) = value.parse::<u32>() {
        if n < spec.min || n > spec.max {
            return Err(format!(
                "{} value {} out of range {}-{}",
                spec.name, n, spec.min, spec.max
            ));
        }
        return Ok(n);
    }
    let upper = value.to_ascii_uppercase();
    if let Some(idx) = spec.names.iter().position(|n| *n == upper) {
        return Ok(spec.name_base + idx as u32);
    }
    Err(format!("invalid {} value '{}'", spec.name, value))
}

fn validate_cron_range(range: &str, spec: &CronFieldSpec) -> Result<(), String> {
    if range == "*" {
        return Ok(());
    }
    if spec.allow_last && (range == "L" || range == "LW") {
        return Ok(());
    }
    if let Some((start, end)) = range.split_once('-') {
        let start = parse_cron_value(start, spec)?;
        let end = parse_cron_value(end, spec)?;
        if start > end {
            return Err(format!("descending {} range '{}'", spec.name, range));
        }
        return Ok(());
    }
    if spec.allow_nth {
        if let Some((day, nth)) = range.split_once('#') {
            parse_cron_value(day, spec)?;
            let n: u32 = nth
                .parse()
                .map_err(|_| format!("invalid nth value '{nth}'"))?;
            if !(1..=5).contains(&n) {
                return Err(format!("nth value {n} out of range 1-5"));
            }
            return Ok(());
        }
    }
    if spec.allow_last {
        if let Some(day) = range.strip_suffix('L') {
            if !day.is_empty() {
                parse_cron_value(day, spec)?;
                return Ok(());
            }
        }
    }
    if spec.allow_weekday {
        if let Some(day) = range.strip_suffix('W') {
            if !day.is_empty() {
                parse_cron_value(day, spec)?;
                return Ok(());
            }
        }
    }
    parse_cron_value(range, spec)?;
    Ok(())
}

fn validate_cron_field(field: &str, spec: &CronFieldSpec) -> Result<(), String> {
    if field == "?" {
        return if spec.allow_question {
            Ok(())
        } else {
            Err(format!("'?' is not allowed in the {} field", spec.name))
        };
    }
    for part in field.split(',') {
        if part.is_empty() {
            return Err(format!("empty list item in {} field", spec.name));
        }
        let (range, step) = match part.split_once('/') {
            Some((range, step)) => (range, Some(step)),
            None => (part, None),
        };
        if let Some(step) = step {
            match step.parse::<u32>() {
                Ok(0) => return Err(format!("step must be positive in {} field", spec.name)),
                Ok(_) => {}
                Err(_) => return Err(format!("invalid step '{step}' in {} field", spec.name)),
            }
        }
        validate_cron_range(range, spec)?;
    }
    Ok(())
}

fn validate_quartz_cron(value: &str) -> Result<(), String> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 6 || fields.len() > 7 {
        return Err(format!("expected 6 or 7 fields, got {}", fields.len()));
    }
    for (field, spec) in fields.iter().zip(QUARTZ_FIELDS.iter()) {
        validate_cron_field(field, spec)?;
    }
    Ok(())
}

struct CronValidator;

impl Validator for CronValidator {
    fn description(&self) -> String {
        "value must be a valid cron expression".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if let Err(err) = validate_quartz_cron(value) {
                diagnostics.add_attribute_error(
                    request.path.clone(),
                    "Invalid Cron Expression",
                    format!("{value} is not a valid cron: {err}"),
                );
            }
        });
    }
}

/// Quartz-style cron: 6 or 7 whitespace-separated fields starting with
/// seconds, ending with an optional year.
pub fn is_cron() -> Arc<dyn Validator> {
    Arc::new(CronValidator)
}

const SCHEDULE_DESCRIPTORS: &[&str] = &[
    "@hourly",
    "@daily",
    "@midnight",
    "@weekly",
    "@monthly",
    "@yearly",
    "@annually",
];

const ALLOWED_MINUTES: &[&str] = &["00", "15", "30", "45"];

fn validate_schedule_hour(value: &str) -> Result<(), String> {
    if value == "*" {
        return Ok(());
    }
    let num: i32 = value
        .parse()
        .map_err(|_| "Hour must be a number".to_string())?;
    if !(0..=23).contains(&num) {
        return Err("Hour must be between 00-23".to_string());
    }
    if value.len() == 1 {
        return Err("Use leading zero for single digit hours (e.g., 03 instead of 3)".to_string());
    }
    Ok(())
}

fn validate_cron_schedule(value: &str) -> Result<(), String> {
    // Cannot mix descriptor and standard formats
    if value.starts_with('@') && value.contains(" * ") {
        return Err(
            "Cannot mix descriptor format (@hourly) with standard cron format (* * * * *). \
             Use only one format."
                .to_string(),
        );
    }

    if value.starts_with('@') {
        if let Some(duration_str) = value.strip_prefix("@every ") {
            let duration = humantime::parse_duration(duration_str.trim()).map_err(|e| {
                format!("Duration must be a valid duration string (e.g., 1h 30m). Got: {duration_str}. Error: {e}")
            })?;
            if duration == Duration::ZERO {
                return Err(format!("Duration must be positive. Got: {duration_str}"));
            }
            return Ok(());
        }
        if !SCHEDULE_DESCRIPTORS.contains(&value) {
            return Err(format!(
                "Must be one of: @hourly, @daily, @midnight, @weekly, @monthly, @yearly, \
                 @annually, or @every <duration>. Got: {value}"
            ));
        }
        return Ok(());
    }

    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 5 {
        return Err(format!(
            "{} parts: {}, standard cron expression must have exactly 5 parts \
             (minute hour day-of-month month day-of-week)",
            parts.len(),
            value
        ));
    }

    if !ALLOWED_MINUTES.contains(&parts[0]) {
        return Err(format!(
            "The minute field must be one of: 00, 15, 30, 45. Got: {}",
            parts[0]
        ));
    }
    validate_schedule_hour(parts[1])
        .map_err(|e| format!("The hour field must be one of: 00-23. Got: {}. {}", parts[1], e))?;

    for (field, spec) in parts[2..].iter().zip(STANDARD_TAIL_FIELDS.iter()) {
        validate_cron_field(field, spec)?;
    }
    Ok(())
}

struct CronScheduleValidator;

impl Validator for CronScheduleValidator {
    fn description(&self) -> String {
        "value must be a standard 5-part cron expression (minute limited to \
         00/15/30/45 and two-digit hour) or a @descriptor"
            .to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if let Err(err) = validate_cron_schedule(value) {
                diagnostics.add_attribute_error(
                    request.path.clone(),
                    "Invalid Cron Schedule",
                    err,
                );
            }
        });
    }
}

/// Restricted schedule format: a 5-field cron whose minute is one of
/// 00/15/30/45 and whose hour is `*` or two-digit, or one of the
/// predefined descriptors including `@every <duration>`.
pub fn is_cron_schedule() -> Arc<dyn Validator> {
    Arc::new(CronScheduleValidator)
}

struct CronTimezoneValidator;

impl Validator for CronTimezoneValidator {
    fn description(&self) -> String {
        "value must be a valid IANA timezone name (e.g., UTC, America/New_York, Europe/London)"
            .to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if value.is_empty() {
                diagnostics.add_attribute_error(
                    request.path.clone(),
                    "Invalid Timezone",
                    "empty value. Must be a valid IANA timezone.",
                );
                return;
            }
            if value.parse::<chrono_tz::Tz>().is_err() {
                diagnostics.add_attribute_error(
                    request.path.clone(),
                    "Invalid Timezone",
                    format!("{value}. Must be a valid IANA timezone."),
                );
            }
        });
    }
}

pub fn is_cron_timezone() -> Arc<dyn Validator> {
    Arc::new(CronTimezoneValidator)
}

struct LicenseTypeValidator;

impl Validator for LicenseTypeValidator {
    fn description(&self) -> String {
        "value must be a recognized license type".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        with_string(request, diagnostics, |value, diagnostics| {
            if !VALID_LICENSE_TYPES.contains(&value) {
                invalid_value(diagnostics, &request.path, &self.description(), value);
            }
        });
    }
}

pub fn license_type() -> Arc<dyn Validator> {
    Arc::new(LicenseTypeValidator)
}

pub const VALID_LICENSE_TYPES: &[&str] = &[
    "0BSD", "AAL", "Abstyles", "Adobe-2006", "Adobe-Glyph", "ADSL", "AFL-1.1", "AFL-1.2",
    "AFL-2.0", "AFL-2.1", "AFL-3.0", "Afmparse", "AGPL-1.0", "AGPL-3.0", "AGPL-3.0-only",
    "AGPL-3.0-or-later", "Aladdin", "AMDPLPA", "AML", "AMPAS", "ANTLR-PD", "Apache-1.0",
    "Apache-1.1", "Apache-2.0", "APAFML", "APL-1.0", "APSL-1.0", "APSL-1.1", "APSL-1.2",
    "APSL-2.0", "Artistic-1.0", "Artistic-1.0-cl8", "Artistic-1.0-Perl", "Artistic-2.0",
    "Atlassian End User License Agreement 3.0", "Attribution", "Bahyph", "Barr", "Beerware",
    "BitTorrent-1.0", "BitTorrent-1.1", "Borceux", "Bouncy-Castle", "BSD", "BSD 2-Clause",
    "BSD 3-Clause", "BSD-1-Clause", "BSD-2-Clause", "BSD-2-Clause-FreeBSD",
    "BSD-2-Clause-NetBSD", "BSD-2-Clause-Patent", "BSD-3-Clause", "BSD-3-Clause-Attribution",
    "BSD-3-Clause-Clear", "BSD-3-Clause-LBNL", "BSD-3-Clause-No-Nuclear-License",
    "BSD-3-Clause-No-Nuclear-License-2014", "BSD-3-Clause-No-Nuclear-Warranty", "BSD-4-Clause",
    "BSD-4-Clause-UC", "BSD-Protection", "BSD-Source-Code", "BSL-1.0", "bzip2-1.0.5",
    "bzip2-1.0.6", "CA-TOSL-1.1", "Caldera", "CATOSL-1.1", "CC-BY-1.0", "CC-BY-2.0",
    "CC-BY-2.5", "CC-BY-3.0", "CC-BY-4.0", "CC-BY-NC-1.0", "CC-BY-NC-2.0", "CC-BY-NC-2.5",
    "CC-BY-NC-3.0", "CC-BY-NC-4.0", "CC-BY-NC-ND-1.0", "CC-BY-NC-ND-2.0", "CC-BY-NC-ND-2.5",
    "CC-BY-NC-ND-3.0", "CC-BY-NC-ND-4.0", "CC-BY-NC-SA-1.0", "CC-BY-NC-SA-2.0",
    "CC-BY-NC-SA-2.5", "CC-BY-NC-SA-3.0", "CC-BY-NC-SA-4.0", "CC-BY-ND-1.0", "CC-BY-ND-2.0",
    "CC-BY-ND-2.5", "CC-BY-ND-3.0", "CC-BY-ND-4.0", "CC-BY-SA-1.0", "CC-BY-SA-2.0",
    "CC-BY-SA-2.5", "CC-BY-SA-3.0", "CC-BY-SA-4.0", "CC0-1.0", "CCAG-2.5", "CDDL-1.0",
    "CDDL-1.1", "CDLA-Permissive-1.0", "CDLA-Sharing-1.0", "CeCILL-1", "CECILL-1.0",
    "CECILL-1.1", "CeCILL-2", "CECILL-2.0", "CECILL-2.1", "CeCILL-2.1", "CeCILL-B", "CECILL-B",
    "CeCILL-C", "CECILL-C", "ClArtistic", "CNRI-Jython", "CNRI-Python",
    "CNRI-Python-GPL-Compatible", "Codehaus", "Condor-1.1", "Copyfree", "CPAL-1.0", "CPL-1.0",
    "CPOL-1.02", "Crossword", "CrystalStacker", "CUA-OPL-1.0", "CUAOFFICE-1.0", "Cube", "curl",
    "D-FSL-1.0", "Day", "Day-Addendum", "diffmark", "DOC", "Dotseqn", "DSDP", "dvipdfm",
    "ECL-1.0", "ECL-2.0", "ECL2", "eCos-2.0", "EFL-1.0", "EFL-2.0", "eGenix", "Eiffel-2.0",
    "Entessa", "Entessa-1.0", "EPL-1.0", "EPL-2.0", "ErlPL-1.1", "EUDatagrid", "EUDATAGRID",
    "EUPL-1.0", "EUPL-1.1", "EUPL-1.2", "Eurosym", "Facebook-Platform", "Fair",
    "Frameworx-1.0", "FreeImage", "FSFAP", "FSFUL", "FSFULLR", "FTL", "GFDL-1.1",
    "GFDL-1.1-only", "GFDL-1.1-or-later", "GFDL-1.2", "GFDL-1.2-only", "GFDL-1.2-or-later",
    "GFDL-1.3", "GFDL-1.3-only", "GFDL-1.3-or-later", "Giftware", "GL2PS", "Glide", "Glulxe",
    "gnuplot", "Go", "GPL-1.0", "GPL-1.0+", "GPL-1.0-only", "GPL-1.0-or-later", "GPL-2.0",
    "GPL-2.0+", "GPL-2.0+CE", "GPL-2.0-only", "GPL-2.0-or-later",
    "GPL-2.0-with-autoconf-exception", "GPL-2.0-with-bison-exception",
    "GPL-2.0-with-classpath-exception", "GPL-2.0-with-font-exception",
    "GPL-2.0-with-GCC-exception", "GPL-3.0", "GPL-3.0+", "GPL-3.0-only", "GPL-3.0-or-later",
    "GPL-3.0-with-autoconf-exception", "GPL-3.0-with-GCC-exception", "gSOAP-1.3b",
    "HaskellReport", "Historical", "HPND", "HSQLDB", "IBM-pibs", "IBMPL-1.0", "ICU", "IJG",
    "ImageMagick", "iMatix", "Imlib2", "Info-ZIP", "Intel", "Intel-ACPI", "Interbase-1.0",
    "IPA", "IPAFont-1.0", "IPL-1.0", "ISC", "IU-Extreme-1.1.1", "JA-SIG", "JasPer-2.0", "JSON",
    "JTA-Specification-1.0.1B", "JTidy", "LAL-1.2", "LAL-1.3", "Latex2e", "Leptonica",
    "LGPL-2.0", "LGPL-2.0+", "LGPL-2.0-only", "LGPL-2.0-or-later", "LGPL-2.1", "LGPL-2.1+",
    "LGPL-2.1-only", "LGPL-2.1-or-later", "LGPL-3.0", "LGPL-3.0+", "LGPL-3.0-only",
    "LGPL-3.0-or-later", "LGPLLR", "Libpng", "libtiff", "LiLiQ-P-1.1", "LiLiQ-R-1.1",
    "LiLiQ-Rplus-1.1", "LPL-1.0", "LPL-1.02", "LPPL-1.0", "LPPL-1.1", "LPPL-1.2", "LPPL-1.3a",
    "LPPL-1.3c", "Lucent-1.02", "MakeIndex", "MirOS", "MIT", "MIT-advertising", "MIT-CMU",
    "MIT-enna", "MIT-feh", "MITNFA", "Motosoto", "Motosoto-0.9.1", "mpich2", "MPL-1.0",
    "MPL-1.1", "MPL-2.0", "MPL-2.0-no-copyleft-exception", "MS-ASP-NET-COMPONENT-RTW",
    "MS-ASP-NET-MVC-3-UPDATE-EULA", "MS-ASP-NET-WEB-PAGES-2-EULA", "MS-DOT-NET-LIBRARY",
    "MS-DOT-NET-LIBRARY-EULA", "MS-DOT-NET-LIBRARY-NON-REDISTRIBUTABLE", "MS-PL", "MS-RL",
    "MS-RSL", "MTLL", "Multics", "Mup", "NASA-1.3", "Naumen", "NAUMEN", "NBPL-1.0", "NCSA",
    "Net-SNMP", "NetCDF", "Nethack", "Newsletr", "NGPL", "NLOD-1.0", "NLPL", "Nokia",
    "Nokia-1.0a", "NOSL", "NOSL-3.0", "Noweb", "NPL-1.0", "NPL-1.1", "NPOSL-3.0", "NRL", "NTP",
    "Nunit", "NUnit-2.6.3", "NUnit-Test-Adapter-2.6.3", "OCCT-PL", "OCLC-2.0", "ODbL-1.0",
    "OFL-1.0", "OFL-1.1", "OGTSL", "OLDAP-1.1", "OLDAP-1.2", "OLDAP-1.3", "OLDAP-1.4",
    "OLDAP-2.0", "OLDAP-2.0.1", "OLDAP-2.1", "OLDAP-2.2", "OLDAP-2.2.1", "OLDAP-2.2.2",
    "OLDAP-2.3", "OLDAP-2.4", "OLDAP-2.5", "OLDAP-2.6", "OLDAP-2.7", "OLDAP-2.8", "OML",
    "Openfont-1.1", "Opengroup", "OpenLDAP", "OpenSSL", "OPL-1.0", "OSET-PL-2.1", "OSL-1.0",
    "OSL-1.1", "OSL-2.0", "OSL-2.1", "OSL-3.0", "PDDL-1.0", "PHP-3.0", "PHP-3.01", "Plexus",
    "PostgreSQL", "psfrag", "psutils", "Public Domain", "Public Domain - SUN", "Python-2.0",
    "Python-2.1.1", "Qhull", "QPL-1.0", "QTPL-1.0", "Rdisc", "Real-1.0", "RHeCos-1.1",
    "RicohPL", "RPL-1.1", "RPL-1.5", "RPSL-1.0", "RSA-MD", "RSCPL", "Ruby", "SAX-PD",
    "Saxpath", "Scala", "SCEA", "Sendmail", "SGI-B-1.0", "SGI-B-1.1", "SGI-B-2.0",
    "SimPL-2.0", "SISSL", "SISSL-1.2", "Sleepycat", "SMLNJ", "SMPPL", "SNIA", "Spencer-86",
    "Spencer-94", "Spencer-99", "SPL-1.0", "StandardML-NJ", "SugarCRM-1.1.3", "SUNPublic-1.0",
    "SWL", "Sybase-1.0", "TCL", "TCP-wrappers", "TMate", "TORQUE-1.1", "TOSL", "TPL",
    "Unicode-DFS-2015", "Unicode-DFS-2016", "Unicode-TOU", "Unlicense", "UoI-NCSA", "UPL-1.0",
    "Vim", "VIM License", "VOSTROM", "VovidaPL-1.0", "VSL-1.0", "W3C", "W3C-19980720",
    "W3C-20150513", "Watcom-1.0", "Wsuipa", "WTFPL", "wxWindows", "X11", "Xerox",
    "XFree86-1.1", "xinetd", "Xnet", "xpp", "XSkat", "YPL-1.0", "YPL-1.1", "Zed", "Zend-2.0",
    "Zimbra-1.3", "Zimbra-1.4", "ZLIB", "Zlib", "zlib-acknowledgement", "ZPL-1.1", "ZPL-2.0",
    "ZPL-2.1",
];
