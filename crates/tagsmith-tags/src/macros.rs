//! Macros that expand the tag table into constructor functions.

/// Expands the tag table into one constructor per entry plus the
/// [`CATALOG`](crate::CATALOG) descriptor table.
///
/// Each entry reads `kind fn_name = "tag" (param => "attribute": param_kind, ...);`
/// where `kind` is `content` or `void`.
macro_rules! html_tags {
	($(
		$(#[$meta:meta])*
		$kind:ident $fn_name:ident = $tag:literal ($($param:ident => $attr:literal : $pkind:ident),* $(,)?);
	)*) => {
		$(
			define_element!(
				$(#[$meta])*
				$kind $fn_name, $tag, [$($param => $attr : $pkind),*]
			);
		)*

		/// Every constructor of this crate, in declaration order.
		pub static CATALOG: &[$crate::TagDescriptor] = &[
			$(
				$crate::TagDescriptor {
					name: $tag,
					void: is_void_kind!($kind),
					attributes: &[$($attr),*],
				},
			)*
		];
	};
}

/// Defines a single constructor function.
macro_rules! define_element {
	($(#[$meta:meta])* content $fn_name:ident, $tag:literal, [$($param:ident => $attr:literal : $pkind:ident),*]) => {
		$(#[$meta])*
		#[allow(clippy::too_many_arguments)]
		pub fn $fn_name(
			content: impl Into<tagsmith_core::Value>,
			$($param: param_type!($pkind),)*
			attributes: tagsmith_core::Attributes,
		) -> tagsmith_core::Element {
			let mut merged = tagsmith_core::Attributes::new();
			$(push_param!(merged, $attr, $pkind, $param);)*
			merged.extend(attributes);
			tagsmith_core::Element::from_parts(
				const { tagsmith_core::TagName::new_const($tag) },
				Some(content.into()),
				merged,
			)
		}
	};
	($(#[$meta:meta])* void $fn_name:ident, $tag:literal, [$($param:ident => $attr:literal : $pkind:ident),*]) => {
		$(#[$meta])*
		#[allow(clippy::too_many_arguments)]
		pub fn $fn_name(
			$($param: param_type!($pkind),)*
			attributes: tagsmith_core::Attributes,
		) -> tagsmith_core::Element {
			let mut merged = tagsmith_core::Attributes::new();
			$(push_param!(merged, $attr, $pkind, $param);)*
			merged.extend(attributes);
			tagsmith_core::Element::from_parts(
				const { tagsmith_core::TagName::new_const($tag) },
				None,
				merged,
			)
		}
	};
}

macro_rules! is_void_kind {
	(void) => {
		true
	};
	(content) => {
		false
	};
}

/// Rust type of a named parameter.
macro_rules! param_type {
	(text) => { Option<&str> };
	(number) => { Option<i64> };
	(positive) => { Option<u32> };
	(flag) => { bool };
}

/// Inserts a named parameter into the attribute map when it is set.
macro_rules! push_param {
	($attrs:ident, $attr:literal, text, $param:ident) => {
		if let Some(value) = $param {
			$attrs.insert(const { tagsmith_core::AttributeName::new_const($attr) }, value);
		}
	};
	($attrs:ident, $attr:literal, number, $param:ident) => {
		if let Some(value) = $param {
			$attrs.insert(const { tagsmith_core::AttributeName::new_const($attr) }, value);
		}
	};
	// Zero is treated as unset.
	($attrs:ident, $attr:literal, positive, $param:ident) => {
		if let Some(value) = $param.filter(|n| *n > 0) {
			$attrs.insert(const { tagsmith_core::AttributeName::new_const($attr) }, value);
		}
	};
	($attrs:ident, $attr:literal, flag, $param:ident) => {
		if $param {
			$attrs.insert(const { tagsmith_core::AttributeName::new_const($attr) }, $attr);
		}
	};
}
