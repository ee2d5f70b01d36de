/// Declares a resource handle that borrows a [`TochkaClient`](crate::TochkaClient)
/// and prefixes its endpoints with `$base_path`.
#[macro_export]
macro_rules! api_resource {
    ($(#[$meta:meta])* $name:ident, $base_path:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::TochkaClient,
        }

        impl<'a> $name<'a> {
            pub const BASE_PATH: &'static str = $base_path;

            pub fn new(client: &'a $crate::TochkaClient) -> Self {
                Self { client }
            }

            pub fn client(&self) -> &'a $crate::TochkaClient {
                self.client
            }

            fn endpoint(endpoint: &str) -> String {
                if endpoint.is_empty() {
                    Self::BASE_PATH.to_string()
                } else {
                    format!("{}/{}", Self::BASE_PATH, endpoint)
                }
            }
        }
    };
}

/// Adds an endpoint method to a resource declared with [`api_resource!`], together
/// with a `<name>_as` variant that decodes the answer into a caller-chosen type.
#[macro_export]
macro_rules! api_endpoint {
    // Without a request body
    (
        $(#[$meta:meta])*
        impl $impl_target:ident;
        fn $fn_name:ident(&self $(, $path_param:ident : $path_type:ty)*);
        method: $method:ident;
        endpoint: $endpoint_fmt:literal;
    ) => {
        $crate::__private::paste! {
            impl<'a> $impl_target<'a> {
                $(#[$meta])*
                pub async fn $fn_name(
                    &self,
                    $($path_param: $path_type,)*
                ) -> $crate::ApiResult<$crate::Value> {
                    let endpoint = Self::endpoint(&format!(
                        $endpoint_fmt $(, $crate::path_segment(&$path_param)?)*
                    ));
                    self.client
                        .request($crate::Method::$method, &endpoint, None::<&()>)
                        .await
                }

                $(#[$meta])*
                pub async fn [<$fn_name _as>]<T>(
                    &self,
                    $($path_param: $path_type,)*
                ) -> $crate::ApiResult<T>
                where
                    T: $crate::__private::DeserializeOwned,
                {
                    $crate::decode(self.$fn_name($($path_param),*).await?)
                }
            }
        }
    };

    // With a JSON request body
    (
        $(#[$meta:meta])*
        impl $impl_target:ident;
        fn $fn_name:ident(&self $(, $path_param:ident : $path_type:ty)* ; body: $body_type:ty);
        method: $method:ident;
        endpoint: $endpoint_fmt:literal;
    ) => {
        $crate::__private::paste! {
            impl<'a> $impl_target<'a> {
                $(#[$meta])*
                pub async fn $fn_name(
                    &self,
                    $($path_param: $path_type,)*
                    body: &$body_type,
                ) -> $crate::ApiResult<$crate::Value> {
                    let endpoint = Self::endpoint(&format!(
                        $endpoint_fmt $(, $crate::path_segment(&$path_param)?)*
                    ));
                    self.client
                        .request($crate::Method::$method, &endpoint, Some(body))
                        .await
                }

                $(#[$meta])*
                pub async fn [<$fn_name _as>]<T>(
                    &self,
                    $($path_param: $path_type,)*
                    body: &$body_type,
                ) -> $crate::ApiResult<T>
                where
                    T: $crate::__private::DeserializeOwned,
                {
                    $crate::decode(self.$fn_name($($path_param,)* body).await?)
                }
            }
        }
    };
}
