use crate::Argument;
use crate::Heading;
use crate::LintError;
use crate::Member;
use crate::MemberKind;
use crate::RawMemberBlock;

/// The exact text a return bullet must begin with.
pub const RETURN_PREFIX: &str = "returns: ";

/// Validate a classified member heading against its raw block and the
/// currently open class.
///
/// Every check runs, so one malformed heading reports all of its defects in
/// a single pass. A class-name disagreement rejects the member. Parameter and
/// return-bullet problems are advisory and the member is still returned.
/// Class headings and unrecognized headings produce neither a member nor an
/// error.
pub fn validate_member(
	current_class: &str,
	heading: Heading<'_>,
	raw: &RawMemberBlock,
	errors: &mut Vec<LintError>,
) -> Option<Member> {
	match heading {
		Heading::Constructor { class, params } => {
			let accepted = check_callable(current_class, class, params, raw, errors);
			accepted.then(|| Member::constructor(arguments(raw), raw.has_return_bullet()))
		}
		Heading::Method {
			class,
			name,
			params,
		} => {
			let accepted = check_callable(current_class, class, params, raw, errors);
			accepted.then(|| Member::method(name, arguments(raw), raw.has_return_bullet()))
		}
		Heading::Property { class, name } => {
			if !same_class(class, current_class) {
				errors.push(header_error(MemberKind::Property, raw));
				return None;
			}

			Some(Member::property(name))
		}
		Heading::Event { name } => {
			if name.is_empty() {
				errors.push(header_error(MemberKind::Event, raw));
				return None;
			}

			Some(Member::event(name))
		}
		Heading::Class { .. } | Heading::Unrecognized => None,
	}
}

/// Runs the class, parameter and return checks for constructors and
/// methods. Returns whether the member should be kept.
fn check_callable(
	current_class: &str,
	class: &str,
	params: &str,
	raw: &RawMemberBlock,
	errors: &mut Vec<LintError>,
) -> bool {
	let accepted = same_class(class, current_class);
	if !accepted {
		// Constructors are reported as methods.
		errors.push(header_error(MemberKind::Method, raw));
	}

	if let Some(error) = check_params(params, raw) {
		errors.push(error);
	}

	if let Some(error) = check_return_bullet(raw) {
		errors.push(error);
	}

	accepted
}

fn same_class(captured: &str, current: &str) -> bool {
	captured.to_lowercase() == current.to_lowercase()
}

fn header_error(kind: MemberKind, raw: &RawMemberBlock) -> LintError {
	LintError::new(format!(
		"Failed to process header as {kind}: {}",
		raw.heading_text
	))
}

fn arguments(raw: &RawMemberBlock) -> Vec<Argument> {
	raw.arg_tokens.iter().map(Argument::new).collect()
}

/// Trim the declared parameter list and drop the `[` `]` markers used for
/// optional parameters.
pub fn normalize_params(params: &str) -> String {
	params.trim().replace(['[', ']'], "")
}

/// Compare the heading's declared parameters with the documented argument
/// bullets.
pub fn check_params(params: &str, raw: &RawMemberBlock) -> Option<LintError> {
	let declared = normalize_params(params);
	let documented = raw.arg_tokens.join(", ");

	(declared != documented).then(|| {
		LintError::new(format!(
			"Heading arguments for \"{}\" do not match described ones, i.e. \"{declared}\" != \
			 \"{documented}\"",
			raw.heading_text
		))
	})
}

/// The leading part of a return bullet that is compared with
/// [`RETURN_PREFIX`]: everything before the first `<`, or up to and
/// including the first space, whichever ends sooner.
pub fn return_bullet_lead(text: &str) -> &str {
	let angle = text.find('<').unwrap_or(text.len());
	let space = text.find(' ').map_or(text.len(), |index| index + 1);

	&text[..angle.min(space)]
}

/// Check that a documented return bullet begins with exactly
/// [`RETURN_PREFIX`].
pub fn check_return_bullet(raw: &RawMemberBlock) -> Option<LintError> {
	let text = raw.return_bullet_text.as_deref()?;
	let lead = return_bullet_lead(text);

	(lead != RETURN_PREFIX).then(|| {
		LintError::new(format!(
			"{} has mistyped 'return' type declaration: expected exactly '{RETURN_PREFIX}', found \
			 '{lead}'",
			raw.heading_text
		))
	})
}
